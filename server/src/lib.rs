use axum::{Router, routing::get};
use chat::providers::GenerateContentProvider;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod utils;

use handlers::content::content;
use handlers::health::hello;

pub struct AppState {
    pub provider: Arc<dyn GenerateContentProvider>,
    /// Answer 502 instead of `200 {}` when generation fails.
    pub fail_on_generation_error: bool,
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/content", get(content))
        .with_state(state)
}
