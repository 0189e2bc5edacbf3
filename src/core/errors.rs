use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error connecting to AnkiConnect: {0}")]
    Transport(Box<reqwest::Error>),

    #[error("AnkiConnect returned an error: {0}")]
    Api(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<std::io::Error> for SearchError {
    fn from(error: std::io::Error) -> Self {
        SearchError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        SearchError::Transport(Box::new(error))
    }
}

impl SearchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_))
    }
}
