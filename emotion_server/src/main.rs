pub mod handlers;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use emotion_detection::env_keys::BIND_ADDRESS;
use emotion_detection::{ClassifierConfig, EmotionClassifier};
use handlers::{emotion_detector, render_index_page};
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";


fn router(classifier: EmotionClassifier) -> Router {
    Router::new()
        .route("/", get(render_index_page))
        .route("/emotionDetector", get(emotion_detector))
        .with_state(classifier)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClassifierConfig::from_env()?;
    let classifier = EmotionClassifier::new(&config)?;
    tracing::info!(endpoint = %config.endpoint, timeout_seconds = config.timeout_seconds, "emotion classifier ready");

    let bind_address = std::env::var(BIND_ADDRESS).unwrap_or(DEFAULT_BIND_ADDRESS.to_owned());
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    tracing::info!(address = %bind_address, "emotion detector listening");

    axum::serve(listener, router(classifier)).await?;
    Ok(())
}
