//! Flattens AnkiConnect `cardsInfo` / `notesInfo` objects into [`CardRecord`]s.
//!
//! What gets extracted is described by [`FIELD_RULES`]; adding a field to the
//! output means adding a [`CardField`] variant and one rule here.

use std::collections::HashMap;

use serde_json::Value;

use super::{
    document::Document,
    utils::strip_markup,
    CardField,
    CardRecord,
};

/// Where a [`CardField`] is read from on the raw object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extract {
    /// `fields[name].value`, markup-stripped unless markup was requested.
    Field(&'static str),
    /// A top-level string attribute, taken as is.
    Attribute(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: CardField,
    pub extract: Extract,
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule { field: CardField::WordSource, extract: Extract::Field("WordSource") },
    FieldRule { field: CardField::WordSourceIPA, extract: Extract::Field("WordSourceIPA") },
    FieldRule {
        field: CardField::WordSourceInflectedForm,
        extract: Extract::Field("WordSourceInflectedForm"),
    },
    FieldRule { field: CardField::WordDestination, extract: Extract::Field("WordDestination") },
    FieldRule { field: CardField::SentenceSource, extract: Extract::Field("SentenceSource") },
    FieldRule {
        field: CardField::SentenceDestination,
        extract: Extract::Field("SentenceDestination"),
    },
    FieldRule {
        field: CardField::SentenceDestination2,
        extract: Extract::Field("SentenceDestination2"),
    },
    FieldRule {
        field: CardField::WordSourceMorphologyAI,
        extract: Extract::Field("WordSourceMorphologyAI"),
    },
    FieldRule { field: CardField::DeckName, extract: Extract::Attribute("deckName") },
];

impl Extract {
    fn read(&self, card: Document<'_>, want_markup: bool) -> String {
        match *self {
            Extract::Field(name) => {
                let value = card.path(&["fields", name, "value"]).as_str();
                if want_markup {
                    value.to_string()
                } else {
                    strip_markup(value)
                }
            }
            Extract::Attribute(name) => card.get(name).as_str().to_string(),
        }
    }
}

pub fn normalize_card(card: &Value, want_markup: bool) -> CardRecord {
    let doc = Document::new(card);
    FIELD_RULES
        .iter()
        .fold(CardRecord::default(), |record, rule| {
            record.with(rule.field, rule.extract.read(doc, want_markup))
        })
}

/// Normalize every card, keeping input order. Malformed cards come out blank
/// instead of failing the batch.
pub fn normalize_cards(cards: &[Value], want_markup: bool) -> Vec<CardRecord> {
    cards.iter().map(|card| normalize_card(card, want_markup)).collect()
}

/// Stable-reorder `items` so that their ids follow `order`. Items whose id is
/// absent or not in `order` keep their relative order after the rest.
pub fn reorder_by_id<T>(
    items: Vec<T>,
    order: &[u64],
    id_of: impl Fn(&T) -> Option<u64>,
) -> Vec<T> {
    let mut positions: HashMap<u64, usize> = HashMap::with_capacity(order.len());
    for (pos, id) in order.iter().enumerate() {
        positions.entry(*id).or_insert(pos);
    }
    let position =
        |item: &T| id_of(item).and_then(|id| positions.get(&id).copied()).unwrap_or(order.len());

    let mut keyed: Vec<(usize, T)> =
        items.into_iter().map(|item| (position(&item), item)).collect();
    keyed.sort_by_key(|(pos, _)| *pos);
    keyed.into_iter().map(|(_, item)| item).collect()
}
