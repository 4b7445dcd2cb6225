//! Bedrock Runtime client construction and the backend seam.
//!
//! [`InferenceBackend`] is the single outbound call the invoker needs. The
//! AWS SDK client implements it directly; tests substitute an in-memory
//! backend. [`Connector`] builds a backend for a region and is only called
//! once per [`crate::invoke::InferenceInvoker`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use aws_sdk_bedrockruntime::Client;
use aws_smithy_types::Blob;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::debug;

use crate::error::BedrockError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A single `InvokeModel` call.
#[derive(Debug, Clone)]
pub struct InvokeModelRequest {
    pub model_id: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Executes `InvokeModel` and returns the fully drained response body.
///
/// Implementations hold no per-request state and are shared across
/// concurrent requests.
pub trait InferenceBackend: Send + Sync {
    fn invoke(&self, request: InvokeModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>>;
}

/// Builds an [`InferenceBackend`] bound to a region.
pub trait Connector: Send + Sync {
    fn connect(&self, region: String) -> BoxFuture<'_, Arc<dyn InferenceBackend>>;
}

/// A region-bound backend handle. Cheap to clone.
#[derive(Clone)]
pub struct InferenceClient {
    region: String,
    backend: Arc<dyn InferenceBackend>,
}

impl InferenceClient {
    pub fn new(region: impl Into<String>, backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            region: region.into(),
            backend,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn backend(&self) -> &dyn InferenceBackend {
        self.backend.as_ref()
    }
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Build a Bedrock Runtime client for `region` using the default
/// credential chain.
pub async fn build_client_with_region(region: &str) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}

/// Connects to the real Bedrock Runtime service.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockConnector;

impl Connector for BedrockConnector {
    fn connect(&self, region: String) -> BoxFuture<'_, Arc<dyn InferenceBackend>> {
        Box::pin(async move {
            let client = build_client_with_region(&region).await;
            Arc::new(client) as Arc<dyn InferenceBackend>
        })
    }
}

impl InferenceBackend for Client {
    fn invoke(&self, request: InvokeModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>> {
        Box::pin(async move {
            let response = self
                .invoke_model()
                .model_id(&request.model_id)
                .content_type(&request.content_type)
                .accept("application/json")
                .body(Blob::new(request.body))
                .send()
                .await
                .map_err(|e| BedrockError::Service(DisplayErrorContext(&e).to_string()))?;

            debug!(
                model_id = %request.model_id,
                content_type = response.content_type(),
                "invoke_model response received"
            );

            Ok(response.body.into_inner())
        })
    }
}
