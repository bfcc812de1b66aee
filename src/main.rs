use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use deiscan::config::AppConfig;
use deiscan::openai::OpenAiClient;
use deiscan::services::fetcher;
use deiscan::{routes, AppState};
use mimalloc::MiMalloc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deiscan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    let http = fetcher::build_client(&config)?;
    let openai = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );

    let state = AppState {
        config: config.clone(),
        http,
        openai,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/api/scan", post(routes::scan::scan_website))
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(host = %addr, "Starting deiscan API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
