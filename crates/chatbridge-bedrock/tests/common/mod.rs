//! In-memory backend and connector used in place of Bedrock Runtime.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chatbridge_bedrock::client::{BoxFuture, Connector, InferenceBackend, InvokeModelRequest};
use chatbridge_bedrock::error::BedrockError;

/// What the fake backend answers with.
#[derive(Clone)]
pub enum Reply {
    Body(Vec<u8>),
    ServiceFailure(String),
}

/// Answers with each scripted reply in turn, repeating the last one.
pub struct FakeBackend {
    replies: Mutex<Vec<Reply>>,
    requests: Mutex<Vec<InvokeModelRequest>>,
}

impl FakeBackend {
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::scripted(vec![reply])
    }

    pub fn scripted(replies: Vec<Reply>) -> Arc<Self> {
        assert!(!replies.is_empty());
        Arc::new(Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying_with_text(text: &str) -> Arc<Self> {
        Self::new(Reply::Body(nova_body(text)))
    }

    pub fn requests(&self) -> Vec<InvokeModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl InferenceBackend for FakeBackend {
    fn invoke(&self, request: InvokeModelRequest) -> BoxFuture<'_, Result<Vec<u8>, BedrockError>> {
        self.requests.lock().unwrap().push(request);
        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.remove(0)
            } else {
                replies[0].clone()
            }
        };
        Box::pin(async move {
            match reply {
                Reply::Body(body) => Ok(body),
                Reply::ServiceFailure(msg) => Err(BedrockError::Service(msg)),
            }
        })
    }
}

/// Hands out the same backend and records every region it was asked for.
pub struct FakeConnector {
    backend: Arc<FakeBackend>,
    connects: AtomicUsize,
    regions: Mutex<Vec<String>>,
}

impl FakeConnector {
    pub fn new(backend: Arc<FakeBackend>) -> Arc<Self> {
        Arc::new(Self {
            backend,
            connects: AtomicUsize::new(0),
            regions: Mutex::new(Vec::new()),
        })
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }
}

impl Connector for FakeConnector {
    fn connect(&self, region: String) -> BoxFuture<'_, Arc<dyn InferenceBackend>> {
        Box::pin(async move {
            self.connects.fetch_add(1, Ordering::SeqCst);
            self.regions.lock().unwrap().push(region);
            // Give concurrent callers a chance to race the initialization.
            tokio::task::yield_now().await;
            self.backend.clone() as Arc<dyn InferenceBackend>
        })
    }
}

/// A Nova-style `InvokeModel` response body.
pub fn nova_body(text: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "output": {
            "message": {
                "role": "assistant",
                "content": [{"text": text}]
            }
        },
        "stopReason": "end_turn",
        "usage": {"inputTokens": 12, "outputTokens": 4, "totalTokens": 16}
    }))
    .unwrap()
}

pub const WEST_ARN: &str = "arn:aws:lambda:us-west-2:123456789012:function:chat";
pub const EU_ARN: &str = "arn:aws:lambda:eu-central-1:123456789012:function:chat";
