//! Chat pipeline orchestration.

use std::sync::Arc;

use reelquery_model::{ChatReply, Classification};

use crate::{
    catalog::CatalogGateway, classify::IntentClassifier, error::CoreError,
    format, route,
};

/// Runs the classify → route → fetch → format pipeline for one chat turn.
///
/// Stateless: nothing is shared between requests beyond the injected
/// collaborators, so any number of turns may run concurrently. The two
/// network calls are sequential by necessity (the catalog request is built
/// from the classifier's answer) and neither is retried at this layer.
pub struct ChatQueryService {
    classifier: Arc<dyn IntentClassifier>,
    catalog: Arc<dyn CatalogGateway>,
}

impl std::fmt::Debug for ChatQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatQueryService").finish_non_exhaustive()
    }
}

impl ChatQueryService {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        catalog: Arc<dyn CatalogGateway>,
    ) -> Self {
        Self {
            classifier,
            catalog,
        }
    }

    /// Answer one piece of user text.
    ///
    /// Rejections and empty result lists are ordinary replies; only a
    /// failing classifier or catalog call errors out.
    pub async fn handle(&self, text: &str) -> Result<ChatReply, CoreError> {
        let intent = match self.classifier.classify(text).await? {
            Classification::Rejection { message } => {
                return Ok(format::rejection(message));
            }
            Classification::Intent(intent) => intent,
        };

        let request = route::route(&intent);
        tracing::debug!(endpoint = %request.endpoint, "routed chat intent");

        let page = self.catalog.fetch(&request).await?;
        Ok(format::format(&page, &intent))
    }
}
