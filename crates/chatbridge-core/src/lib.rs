//! chatbridge-core
//!
//! Pure domain types for the chat endpoint: turns, conversation history,
//! and the caller-facing request and response shapes.
//! No AWS dependency.

pub mod error;
pub mod models;
