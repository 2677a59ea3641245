use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use reelquery_model::ChatReply;

use crate::{errors::AppResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub query: String,
}

/// `POST /api/query/classify`
///
/// Classifies free-form user text and answers with the chat envelope.
/// Rejections come back as HTTP 200 with `success=false`; only classifier
/// or catalog infrastructure failures surface as error statuses.
pub async fn classify_query(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> AppResult<Json<ChatReply>> {
    let reply = state.chat.handle(&request.query).await?;
    Ok(Json(reply))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
