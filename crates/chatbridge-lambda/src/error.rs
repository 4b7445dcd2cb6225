use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use chatbridge_bedrock::chat::ChatError;
use chatbridge_bedrock::error::BedrockError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or rejected request body.
    BadRequest(String),
    /// Bedrock could not be reached or refused the call.
    Service(String),
    /// Bedrock answered with a body we could not read a reply from.
    ResponseFormat(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    kind: &'static str,
    error: String,
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "input_error", msg),
            ApiError::Service(msg) => (StatusCode::BAD_GATEWAY, "service_error", msg),
            ApiError::ResponseFormat(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "response_format_error",
                msg,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(kind, "request failed: {message}");
        }

        let body = ErrorBody {
            success: false,
            kind,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        let message = e.to_string();
        match e {
            ChatError::Input(_) => ApiError::BadRequest(message),
            ChatError::Bedrock(BedrockError::Service(_)) => ApiError::Service(message),
            ChatError::Bedrock(BedrockError::ResponseFormat(_)) => {
                ApiError::ResponseFormat(message)
            }
            ChatError::Bedrock(BedrockError::Serialization(_)) => ApiError::Internal(message),
        }
    }
}
