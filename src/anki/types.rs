use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::SearchError;

pub const API_VERSION: u32 = 6;

#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    pub action: &'a str,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl<'a> ApiRequest<'a> {
    pub fn new(action: &'a str, params: Option<serde_json::Value>) -> Self {
        Self { action, version: API_VERSION, params }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A non-null `error` wins over whatever `result` holds.
    pub fn into_result(self) -> Result<Option<T>, SearchError> {
        match self.error {
            Some(error) => Err(SearchError::Api(error)),
            None => Ok(self.result),
        }
    }
}

/// `getDecks` answer: deck name to the card ids it holds.
pub type DeckCards = HashMap<String, Vec<u64>>;

/// The deck that owns any of `cards`, first card first.
pub fn deck_for_cards<'a>(decks: &'a DeckCards, cards: &[u64]) -> Option<&'a str> {
    cards.iter().find_map(|card| {
        decks.iter().find(|(_, ids)| ids.contains(card)).map(|(name, _)| name.as_str())
    })
}
