//! Candidate policy page discovery via keyword-matched link scanning.
//!
//! Discovery is scoped to the origin host. Off-domain links are never
//! followed, and asset URLs (images, stylesheets, scripts) are excluded
//! even when their anchor text matches.

use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// Anchor-text keywords that mark a link as a potential policy page.
///
/// Matching is case-insensitive substring containment against the
/// whitespace-normalized link text.
pub const POLICY_KEYWORDS: [&str; 14] = [
    "diversity",
    "equity",
    "inclusion",
    "dei",
    "equality",
    "belonging",
    "responsible",
    "responsibility",
    "esg",
    "social responsibility",
    "about us",
    "about",
    "mission",
    "values",
];

/// Scan homepage HTML for links whose text suggests a DEI policy page.
///
/// Returns absolute URLs on the origin host, deduplicated by exact
/// string identity in first-appearance order. An empty result is valid
/// and means the caller falls back to analyzing the homepage itself.
pub fn discover_policy_pages(html: &str, origin: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a").unwrap();
    let asset_pattern =
        Regex::new(r"(?i)\.(jpg|jpeg|png|gif|css|js)$").expect("asset pattern is valid");

    let mut seen = HashSet::new();
    let mut pages = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        let text = anchor
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if text.is_empty() {
            continue;
        }
        if !POLICY_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            continue;
        }

        // Unresolvable hrefs are skipped rather than failing the scan.
        let Ok(resolved) = origin.join(href) else {
            continue;
        };
        if resolved.host_str() != origin.host_str() {
            continue;
        }
        if asset_pattern.is_match(resolved.path()) {
            continue;
        }

        let resolved = resolved.to_string();
        if seen.insert(resolved.clone()) {
            pages.push(resolved);
        }
    }

    pages
}
