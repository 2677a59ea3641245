//! The intent-classification boundary.

use async_trait::async_trait;
use reelquery_model::Classification;

use crate::error::CoreError;

mod openai;

pub use openai::{
    OpenAiClassifier, DEFAULT_OPENAI_BASE, DEFAULT_OPENAI_MODEL,
};

/// Turns raw user text into a structured [`Classification`].
///
/// From the engine's point of view this is a pure request/response boundary:
/// it either yields a classification (intent or rejection) or fails the
/// request. Implementations own their own transport and timeout policy.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(
        &self,
        text: &str,
    ) -> Result<Classification, CoreError>;
}
