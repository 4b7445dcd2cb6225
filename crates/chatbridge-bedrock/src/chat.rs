//! One conversation turn, end to end: validate, assemble, invoke, merge.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use chatbridge_core::error::CoreError;
use chatbridge_core::models::chat::{ChatRequest, ChatResponse};

use crate::conversation::{build_payload, merge_reply};
use crate::error::BedrockError;
use crate::invoke::InferenceInvoker;

/// Any failure of a chat turn. The caller's history is never modified when
/// one of these is returned.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Input(#[from] CoreError),

    #[error(transparent)]
    Bedrock(#[from] BedrockError),
}

impl ChatError {
    /// Stable machine-readable error category.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Input(_) => "input_error",
            ChatError::Bedrock(BedrockError::Service(_)) => "service_error",
            ChatError::Bedrock(BedrockError::ResponseFormat(_)) => "response_format_error",
            ChatError::Bedrock(BedrockError::Serialization(_)) => "serialization_error",
        }
    }
}

/// Run a single chat turn against the model.
///
/// `context_hint` is only used to pick the region the first time the
/// invoker connects.
pub async fn converse_turn(
    invoker: &InferenceInvoker,
    context_hint: &str,
    request: ChatRequest,
) -> Result<ChatResponse, ChatError> {
    request.validate()?;

    let turn_id = Uuid::new_v4();
    info!(
        turn_id = %turn_id,
        model = invoker.model_id(),
        history_len = request.conversation_history.len(),
        "starting chat turn"
    );

    let payload = build_payload(&request.conversation_history, &request.message);

    let reply = invoker
        .converse(context_hint, &payload)
        .await
        .inspect_err(|e| warn!(turn_id = %turn_id, error = %e, "chat turn failed"))?;

    let history = merge_reply(request.conversation_history, &request.message, &reply);

    info!(turn_id = %turn_id, history_len = history.len(), "chat turn complete");

    Ok(ChatResponse::new(reply, history))
}
