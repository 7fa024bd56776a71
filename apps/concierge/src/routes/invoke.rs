use axum::{extract::State, Json};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::models::lex::OutboundReply;
use crate::state::AppState;

/// POST /invoke
///
/// Feeds the body to the concierge exactly as the Lambda runtime would.
/// Bodies that are not JSON are rejected by the extractor before reaching it.
pub async fn handle_invoke(
    State(state): State<AppState>,
    Json(event): Json<Value>,
) -> Json<OutboundReply> {
    let request_id = Uuid::new_v4();
    let reply = state
        .concierge
        .handle(&event)
        .instrument(tracing::info_span!("invoke", %request_id))
        .await;

    Json(reply)
}
