use std::process::ExitCode;

use ankisearch::{
    cli::{
        self,
        Cli,
    },
    logging,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    cli::run(&cli, &mut stdout).await
}
