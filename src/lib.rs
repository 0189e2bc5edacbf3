//! Search Anki cards by field content through AnkiConnect.
//!
//! A search is a straight line: [`core::build_query`] turns a term into an
//! Anki query, [`anki::search`] runs it against AnkiConnect in two round
//! trips, and [`core::normalizer`] flattens the answer into [`core::CardRecord`]s
//! that [`render`] prints.

pub mod anki;
pub mod cli;
pub mod clipboard;
pub mod core;
pub mod logging;
pub mod persistence;
pub mod render;
pub mod settings;
