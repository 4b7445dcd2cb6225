use tracing_subscriber::EnvFilter;

use chatbridge_bedrock::invoke::InferenceInvoker;
use chatbridge_lambda::config::{AppConfig, running_in_lambda};
use chatbridge_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env();
    tracing::info!(model_id = %config.model_id, "starting chatbridge");

    let state = AppState::new(
        InferenceInvoker::new(config.model_id.clone()),
        config.context_hint.clone(),
    );
    let app = chatbridge_lambda::app(state);

    if running_in_lambda() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
