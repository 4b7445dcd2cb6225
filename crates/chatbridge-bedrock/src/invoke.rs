use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::client::{BedrockConnector, Connector, InferenceClient, InvokeModelRequest};
use crate::error::BedrockError;
use crate::payload::{InferencePayload, InvokeResponse};
use crate::region::region_from_context;

/// Model used when `MODEL_ID` is not configured.
pub const DEFAULT_MODEL_ID: &str = "us.amazon.nova-lite-v1:0";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Owns the Bedrock connection and the single outbound call per turn.
///
/// The client is created lazily on the first [`ensure_client`] call and
/// reused afterwards. Its region is fixed by the context hint of that first
/// call; later hints are ignored.
///
/// [`ensure_client`]: InferenceInvoker::ensure_client
pub struct InferenceInvoker {
    model_id: String,
    connector: Arc<dyn Connector>,
    client: OnceCell<InferenceClient>,
}

impl InferenceInvoker {
    /// An invoker that connects to Bedrock Runtime.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self::with_connector(model_id, Arc::new(BedrockConnector))
    }

    pub fn with_connector(model_id: impl Into<String>, connector: Arc<dyn Connector>) -> Self {
        Self {
            model_id: model_id.into(),
            connector,
            client: OnceCell::new(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Return the cached client, building it on first use.
    ///
    /// Concurrent first callers wait on the same initialization, so the
    /// connector runs at most once.
    pub async fn ensure_client(&self, context_hint: &str) -> &InferenceClient {
        self.client
            .get_or_init(|| async move {
                let region = region_from_context(context_hint);
                info!(region = %region, "creating inference client");
                let backend = self.connector.connect(region.clone()).await;
                InferenceClient::new(region, backend)
            })
            .await
    }

    /// Send `payload` to the model and return the reply text.
    pub async fn invoke(
        &self,
        client: &InferenceClient,
        payload: &InferencePayload,
    ) -> Result<String, BedrockError> {
        let body = serde_json::to_vec(payload)?;

        let bytes = client
            .backend()
            .invoke(InvokeModelRequest {
                model_id: self.model_id.clone(),
                body,
                content_type: JSON_CONTENT_TYPE.to_string(),
            })
            .await
            .inspect_err(|e| warn!(model = %self.model_id, error = %e, "invoke_model failed"))?;

        let response: InvokeResponse = serde_json::from_slice(&bytes).map_err(|e| {
            BedrockError::ResponseFormat(format!("response body is not valid JSON: {e}"))
        })?;

        let reply = response.reply_text()?.to_string();

        match response.usage {
            Some(usage) => info!(
                model = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                total_tokens = usage.total_tokens,
                stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
                reply_len = reply.len(),
                "model reply received"
            ),
            None => info!(
                model = %self.model_id,
                reply_len = reply.len(),
                "model reply received"
            ),
        }

        Ok(reply)
    }

    /// [`ensure_client`](Self::ensure_client) followed by
    /// [`invoke`](Self::invoke).
    pub async fn converse(
        &self,
        context_hint: &str,
        payload: &InferencePayload,
    ) -> Result<String, BedrockError> {
        let client = self.ensure_client(context_hint).await;
        self.invoke(client, payload).await
    }
}

impl std::fmt::Debug for InferenceInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceInvoker")
            .field("model_id", &self.model_id)
            .field("client", &self.client.get())
            .finish_non_exhaustive()
    }
}
