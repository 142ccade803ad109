use anyhow::Context;
use chat::providers::GeminiProvider;
use server::{AppState, config::Settings, get_app};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Initializing Gemini relay server");

    let settings = Settings::load().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", settings);

    if settings.api_key.is_none() {
        warn!("API_KEY is not set, content generation requests will fail");
    }

    let addr = format!("{}:{}", settings.host, settings.port);
    let provider = GeminiProvider::new(settings.api_key, &settings.model)
        .with_base_url(&settings.api_base_url);
    info!("Using model: {}", provider.model());

    let state = Arc::new(AppState {
        provider: Arc::new(provider),
        fail_on_generation_error: settings.fail_on_generation_error,
    });

    let app = get_app(state);

    info!("Routes configured, binding to {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
