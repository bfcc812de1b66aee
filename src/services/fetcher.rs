//! Page retrieval with scheme normalization.

use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::AppError;

const USER_AGENT: &str = concat!("deiscan/", env!("CARGO_PKG_VERSION"));

/// Build the process-wide HTTP client used for site fetches.
pub fn build_client(config: &AppConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
}

/// Prefix `https://` to input lacking an explicit scheme.
///
/// Scheme-less input always upgrades to HTTPS, never HTTP.
pub fn ensure_scheme(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// GET a page and return its body text.
///
/// Redirects follow reqwest's default policy. Network failures and
/// non-2xx statuses both surface as fetch errors; there is no retry.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let url = ensure_scheme(url);
    tracing::debug!(url = %url, "Fetching page");

    let response = client.get(&url).send().await.map_err(|e| AppError::Fetch {
        url: url.clone(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch {
            url,
            message: format!("HTTP {status}"),
        });
    }

    response.text().await.map_err(|e| AppError::Fetch {
        url,
        message: e.to_string(),
    })
}
