use std::env;

use chatbridge_bedrock::invoke::DEFAULT_MODEL_ID;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Runtime configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bedrock model or inference profile ID (`MODEL_ID`).
    pub model_id: String,
    /// Context hint used for region selection when a request carries no
    /// Lambda context (`CONTEXT_HINT`).
    pub context_hint: String,
    /// Listener address outside Lambda (`BIND_ADDR`).
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            model_id: var("MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            context_hint: var("CONTEXT_HINT").unwrap_or_default(),
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

/// Whether the process was started by the Lambda runtime.
pub fn running_in_lambda() -> bool {
    env::var_os("AWS_LAMBDA_RUNTIME_API").is_some()
}
