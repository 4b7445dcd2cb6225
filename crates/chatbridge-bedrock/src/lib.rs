//! chatbridge-bedrock
//!
//! Conversation assembly and Bedrock `InvokeModel` invocation for the chat
//! endpoint.

pub mod chat;
pub mod client;
pub mod conversation;
pub mod error;
pub mod invoke;
pub mod payload;
pub mod region;
