pub mod api;
pub mod search;
pub mod types;

pub use api::AnkiClient;
pub use search::{
    browse,
    browse_term,
    search,
};
