use std::{
    fmt,
    str::FromStr,
};

use super::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Word,
    Sentence,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Word => "word",
            SearchMode::Sentence => "sentence",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(SearchMode::Word),
            "sentence" => Ok(SearchMode::Sentence),
            other => Err(SearchError::InvalidArgument(format!(
                "unsupported search type '{other}', must be 'word' or 'sentence'"
            ))),
        }
    }
}

/// Whether the lookup runs over cards (`findCards`/`cardsInfo`) or notes
/// (`findNotes`/`notesInfo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Cards,
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub mode: SearchMode,
    pub want_markup: bool,
    pub granularity: Granularity,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>, mode: SearchMode) -> Self {
        Self { term: term.into(), mode, want_markup: false, granularity: Granularity::Cards }
    }

    pub fn with_markup(mut self, want_markup: bool) -> Self {
        self.want_markup = want_markup;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// The closed set of values a [`CardRecord`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardField {
    WordSource,
    WordSourceIPA,
    WordSourceInflectedForm,
    WordDestination,
    SentenceSource,
    SentenceDestination,
    SentenceDestination2,
    WordSourceMorphologyAI,
    DeckName,
}

impl CardField {
    pub const COUNT: usize = 9;

    pub const ALL: [CardField; CardField::COUNT] = [
        CardField::WordSource,
        CardField::WordSourceIPA,
        CardField::WordSourceInflectedForm,
        CardField::WordDestination,
        CardField::SentenceSource,
        CardField::SentenceDestination,
        CardField::SentenceDestination2,
        CardField::WordSourceMorphologyAI,
        CardField::DeckName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardField::WordSource => "WordSource",
            CardField::WordSourceIPA => "WordSourceIPA",
            CardField::WordSourceInflectedForm => "WordSourceInflectedForm",
            CardField::WordDestination => "WordDestination",
            CardField::SentenceSource => "SentenceSource",
            CardField::SentenceDestination => "SentenceDestination",
            CardField::SentenceDestination2 => "SentenceDestination2",
            CardField::WordSourceMorphologyAI => "WordSourceMorphologyAI",
            CardField::DeckName => "DeckName",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One matched card, flattened. Every field is present; missing upstream
/// values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    values: [String; CardField::COUNT],
}

impl CardRecord {
    pub fn with(mut self, field: CardField, value: impl Into<String>) -> Self {
        self.values[field.index()] = value.into();
        self
    }

    pub fn get(&self, field: CardField) -> &str {
        &self.values[field.index()]
    }

    pub fn deck_name(&self) -> &str {
        self.get(CardField::DeckName)
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NoMatches,
    Found(Vec<CardRecord>),
}

impl SearchOutcome {
    pub fn records(&self) -> &[CardRecord] {
        match self {
            SearchOutcome::NoMatches => &[],
            SearchOutcome::Found(records) => records,
        }
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("word".parse::<SearchMode>().unwrap(), SearchMode::Word);
        assert_eq!("sentence".parse::<SearchMode>().unwrap(), SearchMode::Sentence);

        let err = "paragraph".parse::<SearchMode>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidArgument(_)));
        assert!(err.to_string().contains("paragraph"));
    }

    #[test]
    fn test_card_field_indices_match_all() {
        for (i, field) in CardField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i, "{field} is out of place in CardField::ALL");
        }
    }

    #[test]
    fn test_card_record_defaults_to_empty() {
        let record = CardRecord::default();
        assert!(record.is_blank());
        assert!(CardField::ALL.into_iter().all(|field| record.get(field).is_empty()));

        let record = record.with(CardField::WordSource, "run");
        assert_eq!(record.get(CardField::WordSource), "run");
        assert_eq!(record.deck_name(), "");
        assert!(!record.is_blank());
    }
}
