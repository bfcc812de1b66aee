//! One-shot scan from the command line, for development.
//!
//! Usage: `cargo run --bin scan -- example.com`
//!
//! Requires `OPENAI_API_KEY` (reads .env). Prints the scan result as
//! pretty-printed JSON on stdout.

use deiscan::config::AppConfig;
use deiscan::openai::OpenAiClient;
use deiscan::services::{fetcher, scanner};
use deiscan::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let url = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: scan <url>"))?;

    let config = AppConfig::from_env().expect("Failed to load configuration");
    let http = fetcher::build_client(&config)?;
    let openai = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );
    let state = AppState {
        config,
        http,
        openai,
    };

    let result = scanner::scan_site(&state, &url).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
