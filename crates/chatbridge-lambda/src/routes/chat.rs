use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use chatbridge_bedrock::chat::{ChatError, converse_turn};
use chatbridge_core::models::chat::{ChatRequest, ChatResponse};

use crate::context::ContextHint;
use crate::error::ApiError;
use crate::state::AppState;

/// Run one conversation turn.
///
/// The region hint comes from the Lambda invocation context when present,
/// otherwise from configuration.
pub async fn chat(
    State(state): State<AppState>,
    ContextHint(hint): ContextHint,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = ChatRequest::from_slice(&body).map_err(ChatError::from)?;
    let hint = hint.as_deref().unwrap_or(&state.context_hint);

    let resp = converse_turn(&state.invoker, hint, req).await?;
    Ok(Json(resp))
}
