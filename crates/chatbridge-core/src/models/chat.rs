use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::turn::ConversationHistory;

/// Inbound chat request.
///
/// `message` is the newest user utterance. It is not part of
/// `conversation_history` until the model has replied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: ConversationHistory,
}

impl ChatRequest {
    /// Decode a request from a JSON body and validate it.
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        let request: ChatRequest = serde_json::from_slice(body)?;
        request.validate()?;
        Ok(request)
    }

    /// Reject messages that are empty or contain only whitespace.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.message.trim().is_empty() {
            return Err(CoreError::EmptyMessage);
        }
        Ok(())
    }
}

/// Successful reply to a chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    /// Submitted history followed by the user turn and the assistant reply.
    pub conversation_history: ConversationHistory,
}

impl ChatResponse {
    pub fn new(response: String, conversation_history: ConversationHistory) -> Self {
        Self {
            success: true,
            response,
            conversation_history,
        }
    }
}
