//! Engine error taxonomy.
//!
//! Only infrastructure faults live here. A rejected intent and an empty
//! result list are ordinary replies, not errors, and never pass through
//! this type.

/// Request-fatal failures from the classifier or catalog boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(#[source] reqwest::Error),

    /// The classifier answered but violated its output contract. Never
    /// silently defaulted into an intent.
    #[error("classifier returned malformed output: {0}")]
    ClassifierOutput(String),

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] reqwest::Error),

    #[error("catalog request failed with status {status}")]
    CatalogStatus { status: u16 },

    #[error("could not parse catalog response: {0}")]
    CatalogParse(#[source] reqwest::Error),
}
