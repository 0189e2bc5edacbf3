//! Canned AnkiConnect payloads.

use ankisearch::settings::Settings;
use serde_json::{
    json,
    Value,
};

/// One `cardsInfo` entry. `fields` maps field name to raw value.
pub fn card(card_id: u64, deck: &str, fields: &[(&str, &str)]) -> Value {
    json!({
        "cardId": card_id,
        "deckName": deck,
        "modelName": "Vocabulary",
        "fields": field_map(fields),
    })
}

/// One `notesInfo` entry.
pub fn note(note_id: u64, cards: &[u64], fields: &[(&str, &str)]) -> Value {
    json!({
        "noteId": note_id,
        "modelName": "Vocabulary",
        "tags": [],
        "cards": cards,
        "fields": field_map(fields),
    })
}

fn field_map(fields: &[(&str, &str)]) -> Value {
    let map: serde_json::Map<String, Value> = fields
        .iter()
        .enumerate()
        .map(|(order, (name, value))| {
            (name.to_string(), json!({ "value": value, "order": order }))
        })
        .collect();
    Value::Object(map)
}

pub fn settings_for(endpoint: &str) -> Settings {
    Settings::default().with_overrides(Some(endpoint.to_string()), Some(2))
}
