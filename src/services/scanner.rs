//! Per-request scan orchestration.
//!
//! One linear pipeline per request: normalize the origin, discover
//! candidate policy pages, then fetch, extract, and summarize each page
//! strictly in sequence. Any step failure aborts the request; partial
//! results are not preserved.

use url::Url;

use crate::errors::AppError;
use crate::models::scan::{ScanPolicies, ScanResult};
use crate::services::{discovery, extractor, fetcher, summarizer};
use crate::AppState;

/// Reduce raw user input to the origin the scan is scoped to.
///
/// Strips a leading `www.` and any path, keeps an explicit scheme, and
/// defaults to `https://` when none is present. Input that still fails
/// to parse surfaces as a fetch error, the same way an unreachable host
/// would.
pub fn origin_from_input(raw: &str) -> Result<Url, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("url is required".to_string()));
    }

    let with_scheme = fetcher::ensure_scheme(trimmed);
    let parsed = Url::parse(&with_scheme).map_err(|e| AppError::Fetch {
        url: with_scheme.clone(),
        message: e.to_string(),
    })?;

    let host = parsed.host_str().ok_or_else(|| AppError::Fetch {
        url: with_scheme.clone(),
        message: "URL has no host".to_string(),
    })?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut origin = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        origin.push_str(&format!(":{port}"));
    }

    Url::parse(&origin).map_err(|e| AppError::Fetch {
        url: origin.clone(),
        message: e.to_string(),
    })
}

/// Run the full pipeline for one request and assemble the aggregate
/// result.
pub async fn scan_site(state: &AppState, raw_url: &str) -> Result<ScanResult, AppError> {
    let origin = origin_from_input(raw_url)?;
    let origin_display = origin.as_str().trim_end_matches('/').to_string();

    tracing::info!(url = %origin_display, "Scan started");

    let candidates = if state.config.discovery_enabled {
        let homepage = fetcher::fetch_html(&state.http, &origin_display).await?;
        let candidates = discovery::discover_policy_pages(&homepage, &origin);
        tracing::debug!(
            url = %origin_display,
            candidates = candidates.len(),
            "Link discovery finished"
        );
        candidates
    } else {
        Vec::new()
    };

    // Zero candidates means the homepage itself is analyzed, a designed
    // fallback rather than error recovery.
    let pages: Vec<String> = if candidates.is_empty() {
        vec![origin_display.clone()]
    } else {
        candidates
            .into_iter()
            .take(state.config.max_pages)
            .collect()
    };

    let mut summaries = Vec::with_capacity(pages.len());
    for page_url in &pages {
        let html = fetcher::fetch_html(&state.http, page_url).await?;
        let content = extractor::extract_content(&html, state.config.max_content_chars)?;
        let summary = summarizer::summarize_page(
            &state.openai,
            &state.config.openai_model,
            page_url,
            &content,
        )
        .await?;
        summaries.push(summary);
    }

    tracing::info!(url = %origin_display, pages = pages.len(), "Scan completed");

    Ok(ScanResult {
        url: origin_display,
        pages_analyzed: pages,
        policies: ScanPolicies::from_summaries(summaries),
    })
}
