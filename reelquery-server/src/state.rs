use std::sync::Arc;

use reelquery_core::ChatQueryService;

/// Shared handles for request handlers. Cheap to clone; all fields are
/// immutable once the server is up.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatQueryService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(chat: ChatQueryService) -> Self {
        Self {
            chat: Arc::new(chat),
        }
    }
}
