use std::{
    io::Write,
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{
    CommandFactory,
    Parser,
};
use tracing::info;

use crate::{
    anki::{
        self,
        AnkiClient,
    },
    clipboard,
    core::{
        Granularity,
        Query,
        SearchError,
        SearchMode,
        SearchOutcome,
        SearchRequest,
    },
    render::{
        self,
        OutputFormat,
    },
    settings::Settings,
};

#[derive(Parser, Debug)]
#[command(name = "anki-search", about = "Search for a word in any Anki deck")]
pub struct Cli {
    /// Word to search for in any Anki deck (e.g. --query "test")
    #[arg(long, value_name = "TERM")]
    pub query: Option<String>,

    /// 'word' searches WordSource, 'sentence' searches SentenceSource
    #[arg(long = "search-type", value_name = "TYPE", default_value = "word")]
    pub search_type: SearchMode,

    /// Keep field markup and print results as HTML with line breaks
    #[arg(long)]
    pub html: bool,

    /// Search notes instead of cards
    #[arg(long)]
    pub notes: bool,

    /// Open the Anki browser with this query
    #[arg(long, value_name = "QUERY")]
    pub browse: Option<String>,

    /// Open the Anki browser searching for the clipboard contents
    #[arg(long)]
    pub browse_clipboard: bool,

    /// AnkiConnect address, overrides the settings file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds, overrides the settings file
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Settings file to use instead of the one in the user config dir
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What one invocation does, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BrowseClipboard(SearchMode),
    Browse(Query),
    Search(SearchRequest),
    Help,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.browse_clipboard {
            return Action::BrowseClipboard(self.search_type);
        }
        if let Some(query) = &self.browse {
            return Action::Browse(Query::raw(query.clone()));
        }
        if let Some(term) = &self.query {
            let granularity = if self.notes { Granularity::Notes } else { Granularity::Cards };
            return Action::Search(
                SearchRequest::new(term.clone(), self.search_type)
                    .with_markup(self.html)
                    .with_granularity(granularity),
            );
        }
        Action::Help
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Plain
        }
    }

    pub fn settings(&self) -> Settings {
        Settings::load(self.config.as_deref()).with_overrides(self.endpoint.clone(), self.timeout)
    }
}

fn connect(cli: &Cli) -> Result<AnkiClient, SearchError> {
    AnkiClient::new(&cli.settings())
}

pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<ExitCode> {
    match cli.action() {
        Action::Help => {
            write!(out, "{}", Cli::command().render_help())?;
            return Ok(ExitCode::from(2));
        }
        Action::BrowseClipboard(mode) => {
            let term = clipboard::read_clipboard_text()?;
            anki::browse_term(&connect(cli)?, &term, mode).await?;
        }
        Action::Browse(query) => {
            anki::browse(&connect(cli)?, &query).await?;
        }
        Action::Search(request) => match anki::search(&connect(cli)?, &request).await? {
            SearchOutcome::NoMatches => info!(term = %request.term, "nothing found"),
            SearchOutcome::Found(records) => {
                render::render(out, &records, cli.output_format())
                    .context("failed to write search results")?;
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
