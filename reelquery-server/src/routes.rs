use axum::{
    routing::{get, post},
    Router,
};

use crate::{query_handlers, state::AppState};

/// Create the API router. Middleware layers (CORS, tracing) are applied by
/// the caller.
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/query/classify",
            post(query_handlers::classify_query),
        )
        .route("/health", get(query_handlers::health))
        .with_state(state)
}
