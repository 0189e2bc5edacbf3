use serde_json::Value;
use tracing::{
    debug,
    info,
};

use super::{
    api::AnkiClient,
    types::deck_for_cards,
};
use crate::core::{
    build_query,
    document::Document,
    normalizer::{
        normalize_card,
        normalize_cards,
        reorder_by_id,
    },
    CardField,
    Granularity,
    Query,
    SearchError,
    SearchMode,
    SearchOutcome,
    SearchRequest,
};

pub async fn search(
    client: &AnkiClient,
    request: &SearchRequest,
) -> Result<SearchOutcome, SearchError> {
    let query = build_query(&request.term, request.mode)?;
    debug!(%query, granularity = ?request.granularity, "built query");

    match request.granularity {
        Granularity::Cards => search_cards(client, &query, request.want_markup).await,
        Granularity::Notes => search_notes(client, &query, request.want_markup).await,
    }
}

fn id_of(key: &'static str) -> impl Fn(&Value) -> Option<u64> {
    move |item| Document::new(item).get(key).as_u64()
}

/// `findCards` then `cardsInfo`. An empty id list ends the search early.
pub async fn search_cards(
    client: &AnkiClient,
    query: &Query,
    want_markup: bool,
) -> Result<SearchOutcome, SearchError> {
    let card_ids = client.find_cards(query).await?;
    if card_ids.is_empty() {
        info!("no cards matched");
        return Ok(SearchOutcome::NoMatches);
    }
    info!(count = card_ids.len(), "cards matched");

    let cards = client.cards_info(&card_ids).await?;
    let cards = reorder_by_id(cards, &card_ids, id_of("cardId"));

    Ok(SearchOutcome::Found(normalize_cards(&cards, want_markup)))
}

/// `findNotes`, `notesInfo`, then `getDecks` to name each note's deck.
pub async fn search_notes(
    client: &AnkiClient,
    query: &Query,
    want_markup: bool,
) -> Result<SearchOutcome, SearchError> {
    let note_ids = client.find_notes(query).await?;
    if note_ids.is_empty() {
        info!("no notes matched");
        return Ok(SearchOutcome::NoMatches);
    }
    info!(count = note_ids.len(), "notes matched");

    let notes = client.notes_info(&note_ids).await?;
    let notes = reorder_by_id(notes, &note_ids, id_of("noteId"));

    let card_ids: Vec<u64> =
        notes.iter().flat_map(|note| Document::new(note).get("cards").as_u64_list()).collect();
    let decks = if card_ids.is_empty() {
        Default::default()
    } else {
        client.get_decks(&card_ids).await?
    };

    let records = notes
        .iter()
        .map(|note| {
            let cards = Document::new(note).get("cards").as_u64_list();
            let deck = deck_for_cards(&decks, &cards).unwrap_or_default();
            normalize_card(note, want_markup).with(CardField::DeckName, deck)
        })
        .collect();

    Ok(SearchOutcome::Found(records))
}

/// Open the browser on a query built from `term`.
pub async fn browse_term(
    client: &AnkiClient,
    term: &str,
    mode: SearchMode,
) -> Result<Vec<u64>, SearchError> {
    let query = build_query(term, mode)?;
    browse(client, &query).await
}

pub async fn browse(client: &AnkiClient, query: &Query) -> Result<Vec<u64>, SearchError> {
    let shown = client.gui_browse(query).await?;
    info!(%query, count = shown.len(), "opened card browser");
    Ok(shown)
}
