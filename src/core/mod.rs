pub mod document;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod query;
pub mod utils;

pub use errors::SearchError;
pub use models::{
    CardField,
    CardRecord,
    Granularity,
    SearchMode,
    SearchOutcome,
    SearchRequest,
};
pub use query::{
    build_query,
    Query,
};
