//! Core data model definitions shared across reelquery crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod intent;
pub mod reply;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{CatalogItem, CatalogPage, CatalogRequest};
pub use intent::{
    Classification, Intent, IntentError, IntentRecord, ListingMode, MediaType,
    QueryKind, DEFAULT_RESULT_COUNT,
};
pub use reply::ChatReply;
