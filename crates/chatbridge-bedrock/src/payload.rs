//! Wire types for the Bedrock `InvokeModel` messages schema.
//!
//! The request side mirrors the messages-v1 body accepted by Amazon Nova
//! models: every message carries a list of content blocks, and the
//! conversation is capped by an `inferenceConfig` block. The response side
//! keeps every field on the reply path optional so a missing field surfaces
//! as a [`BedrockError::ResponseFormat`] instead of a decode failure with no
//! location.

use serde::{Deserialize, Serialize};

use chatbridge_core::models::turn::{ChatRole, Turn};

use crate::error::BedrockError;

// ── Request ──────────────────────────────────────────────────────────────────

/// Request body sent to `InvokeModel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferencePayload {
    pub messages: Vec<PayloadMessage>,
    pub inference_config: InferenceConfig,
}

/// One message in the payload. Content is a list holding a single text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadMessage {
    pub role: ChatRole,
    pub content: Vec<TextBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

/// Sampling limits sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    pub max_tokens: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f64,
    pub top_p: f64,
}

impl PayloadMessage {
    pub fn text(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![TextBlock { text: text.into() }],
        }
    }
}

impl From<&Turn> for PayloadMessage {
    fn from(turn: &Turn) -> Self {
        PayloadMessage::text(turn.role, turn.content.clone())
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// Decoded `InvokeModel` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    pub output: Option<InvokeOutput>,
    pub stop_reason: Option<String>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvokeOutput {
    pub message: Option<OutputMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputMessage {
    pub role: Option<String>,
    pub content: Option<Vec<OutputContent>>,
}

/// A content block in the reply. Non-text blocks (e.g. reasoning) decode
/// with `text: None`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputContent {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl InvokeResponse {
    /// The text of the first content block of the assistant message
    /// (`output.message.content[0].text`).
    ///
    /// A message whose `role` is present but not `assistant` is rejected.
    pub fn reply_text(&self) -> Result<&str, BedrockError> {
        let output = self.output.as_ref().ok_or_else(|| missing("output"))?;
        let message = output
            .message
            .as_ref()
            .ok_or_else(|| missing("output.message"))?;
        if let Some(role) = message.role.as_deref()
            && role != ASSISTANT_ROLE
        {
            return Err(BedrockError::ResponseFormat(format!(
                "expected `output.message.role` to be `{ASSISTANT_ROLE}`, got `{role}`"
            )));
        }
        let content = message
            .content
            .as_ref()
            .ok_or_else(|| missing("output.message.content"))?;
        let first = content
            .first()
            .ok_or_else(|| missing("output.message.content[0]"))?;
        first
            .text
            .as_deref()
            .ok_or_else(|| missing("output.message.content[0].text"))
    }
}

const ASSISTANT_ROLE: &str = "assistant";

fn missing(path: &str) -> BedrockError {
    BedrockError::ResponseFormat(format!("missing field `{path}`"))
}
