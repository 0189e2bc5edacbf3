//! Shared helpers for the integration harnesses.
//!
//! `mod common; use common::*;` at the top of each harness file.

#![allow(dead_code)]

pub mod fake_anki_connect;
pub mod fixtures;

pub use fake_anki_connect::*;
pub use fixtures::*;
