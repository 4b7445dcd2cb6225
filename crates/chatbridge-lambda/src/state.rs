use std::sync::Arc;

use chatbridge_bedrock::invoke::InferenceInvoker;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<InferenceInvoker>,
    /// Fallback context hint for requests without a Lambda context.
    pub context_hint: String,
}

impl AppState {
    pub fn new(invoker: InferenceInvoker, context_hint: impl Into<String>) -> Self {
        Self {
            invoker: Arc::new(invoker),
            context_hint: context_hint.into(),
        }
    }
}
