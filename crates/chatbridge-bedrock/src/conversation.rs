//! Mapping between the caller's conversation and the Bedrock message list.
//!
//! Both directions are pure. The payload is built before the model is
//! called; the reply is merged afterwards, and only on success.

use std::iter;

use chatbridge_core::models::turn::{ChatRole, ConversationHistory, Turn};

use crate::payload::{InferenceConfig, InferencePayload, PayloadMessage};

/// Sampling configuration attached to every chat request.
pub const CONVERSATION_INFERENCE_CONFIG: InferenceConfig = InferenceConfig {
    max_tokens: 512,
    stop_sequences: Vec::new(),
    temperature: 0.7,
    top_p: 0.9,
};

/// Build the `InvokeModel` body for a new user message.
///
/// The message list is `history` in order, followed by `message` as a user
/// turn. Roles are copied as given; alternation is not checked.
pub fn build_payload(history: &[Turn], message: &str) -> InferencePayload {
    let messages = history
        .iter()
        .map(PayloadMessage::from)
        .chain(iter::once(PayloadMessage::text(ChatRole::User, message)))
        .collect();

    InferencePayload {
        messages,
        inference_config: CONVERSATION_INFERENCE_CONFIG,
    }
}

/// Append the user message and the model's reply to `history`.
pub fn merge_reply(
    mut history: ConversationHistory,
    message: &str,
    reply: &str,
) -> ConversationHistory {
    history.reserve(2);
    history.push(Turn::user(message));
    history.push(Turn::assistant(reply));
    history
}
