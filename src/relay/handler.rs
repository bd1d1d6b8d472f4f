use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use super::client::RelayClient;
use super::error::RelayError;
use super::types::{ChatReply, ChatRequest};

#[derive(Clone)]
pub struct ApiState {
    pub relay: Arc<RelayClient>,
    pub ping_message: Arc<str>,
}

pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn ping(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({ "message": &*state.ping_message }))
}

async fn chat(
    State(state): State<ApiState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected chat request body");
        RelayError::InvalidRequest
    })?;
    if request.message.is_empty() {
        warn!("rejected chat request with empty message");
        return Err(RelayError::InvalidRequest);
    }

    let message = state.relay.complete(&request).await.map_err(|err| {
        if let RelayError::Internal(cause) = &err {
            warn!(%cause, "chat relay failed");
        }
        err
    })?;
    Ok(Json(ChatReply { message }))
}
