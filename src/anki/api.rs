use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::types::{
    ApiRequest,
    ApiResponse,
    DeckCards,
};
use crate::{
    core::{
        Query,
        SearchError,
    },
    settings::Settings,
};

/// Connection to one AnkiConnect endpoint. Every call is a single POST with
/// the configured timeout; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http: Client,
    endpoint: String,
}

impl AnkiClient {
    pub fn new(settings: &Settings) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.timeout())
            .build()?;
        Ok(Self { http, endpoint: settings.endpoint.clone() })
    }

    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<Value>,
    ) -> Result<Option<T>, SearchError> {
        debug!(action, endpoint = %self.endpoint, "AnkiConnect request");

        let response: ApiResponse<T> = self
            .http
            .post(&self.endpoint)
            .json(&ApiRequest::new(action, params))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_result()
    }

    pub async fn find_cards(&self, query: &Query) -> Result<Vec<u64>, SearchError> {
        let params = serde_json::json!({ "query": query.as_str() });
        Ok(self.make_request("findCards", Some(params)).await?.unwrap_or_default())
    }

    pub async fn cards_info(&self, card_ids: &[u64]) -> Result<Vec<Value>, SearchError> {
        let params = serde_json::json!({ "cards": card_ids });
        Ok(self.make_request("cardsInfo", Some(params)).await?.unwrap_or_default())
    }

    pub async fn find_notes(&self, query: &Query) -> Result<Vec<u64>, SearchError> {
        let params = serde_json::json!({ "query": query.as_str() });
        Ok(self.make_request("findNotes", Some(params)).await?.unwrap_or_default())
    }

    pub async fn notes_info(&self, note_ids: &[u64]) -> Result<Vec<Value>, SearchError> {
        let params = serde_json::json!({ "notes": note_ids });
        Ok(self.make_request("notesInfo", Some(params)).await?.unwrap_or_default())
    }

    pub async fn get_decks(&self, card_ids: &[u64]) -> Result<DeckCards, SearchError> {
        let params = serde_json::json!({ "cards": card_ids });
        Ok(self.make_request("getDecks", Some(params)).await?.unwrap_or_default())
    }

    /// Open the card browser on `query`; returns the ids it shows.
    pub async fn gui_browse(&self, query: &Query) -> Result<Vec<u64>, SearchError> {
        let params = serde_json::json!({ "query": query.as_str() });
        Ok(self.make_request("guiBrowse", Some(params)).await?.unwrap_or_default())
    }
}
