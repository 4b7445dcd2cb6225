use thiserror::Error;

/// A malformed request reaching the conversation core.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidRequest(e.to_string())
    }
}
