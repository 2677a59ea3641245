//! # reelquery-core
//!
//! The query engine behind the reelquery chat backend:
//!
//! - **Classification boundary**: [`classify::IntentClassifier`] turns raw
//!   user text into a structured intent (or a rejection), backed in
//!   production by an OpenAI chat-completions call.
//! - **Routing**: [`route::route`] maps a validated intent to exactly one
//!   upstream catalog request.
//! - **Catalog boundary**: [`catalog::CatalogGateway`] performs the
//!   authenticated upstream read and owns retry/timeout policy.
//! - **Formatting**: [`format`] renders raw results into the user-facing
//!   reply envelope.
//! - **Orchestration**: [`chat::ChatQueryService`] runs the whole pipeline
//!   once per request, statelessly.

pub mod catalog;
pub mod chat;
pub mod classify;
pub mod error;
pub mod format;
pub mod route;

pub use catalog::{CatalogGateway, TmdbGateway};
pub use chat::ChatQueryService;
pub use classify::{IntentClassifier, OpenAiClassifier};
pub use error::CoreError;
