pub mod config;
pub mod errors;
pub mod models;
pub mod openai;
pub mod routes;
pub mod services;

use crate::openai::OpenAiClient;

/// Shared application state passed to all Axum handlers.
///
/// Cloning is cheap: both HTTP clients are internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub http: reqwest::Client,
    pub openai: OpenAiClient,
}
