use std::fmt;

use super::{
    SearchError,
    SearchMode,
};

/// Fields of which at least one must be populated for a word match to count.
const POPULATED_FIELDS: [&str; 3] =
    ["WordDestination", "SentenceDestination", "WordSourceMorphologyAI"];

/// A query in Anki's search grammar. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Wrap an already written query, e.g. one passed straight to the browser.
    pub fn raw(query: impl Into<String>) -> Self {
        Query(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn populated(field: &str) -> String {
    format!("{field}:_*")
}

/// Build the search query for `term`. The term is inserted verbatim; Anki's
/// reserved characters are not escaped.
pub fn build_query(term: &str, mode: SearchMode) -> Result<Query, SearchError> {
    if term.is_empty() {
        return Err(SearchError::InvalidArgument("search term must not be empty".to_string()));
    }

    let query = match mode {
        SearchMode::Word => {
            let populated =
                POPULATED_FIELDS.iter().map(|f| populated(f)).collect::<Vec<_>>().join(" OR ");
            format!(
                "(\"WordSource:*{term}*\" OR \"WordSourceInflectedForm:*{term}*\") ({populated})"
            )
        }
        // The trailing bare `WordSource:` filter is kept as the scripts always sent it.
        SearchMode::Sentence => {
            format!("\"SentenceSource:*{term}*\" {} WordSource:", populated("SentenceDestination"))
        }
    };

    Ok(Query(query))
}
