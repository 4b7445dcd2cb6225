use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Service(String),

    #[error("response did not match the expected format: {0}")]
    ResponseFormat(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
