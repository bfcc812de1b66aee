//! Plain-text extraction from fetched HTML.
//!
//! Extraction selects paragraph, heading, and list-item elements rather
//! than whole-body text, which keeps paragraph boundaries intact for
//! downstream prompting. Script, style, and noscript subtrees are
//! skipped entirely so their content never reaches the model.

use scraper::{ElementRef, Html, Selector};

use crate::errors::AppError;

/// Serialize the readable text of a page, whitespace-normalized and
/// truncated to at most `max_chars` characters.
pub fn extract_content(html: &str, max_chars: usize) -> Result<String, AppError> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse("p, h1, h2, h3, h4, h5, h6, li").unwrap();

    let mut blocks = Vec::new();
    for element in document.select(&content_selector) {
        let mut raw = String::new();
        collect_text(element, &mut raw);

        let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !cleaned.is_empty() {
            blocks.push(cleaned);
        }
    }

    let text = blocks.join("\n");
    if text.is_empty() {
        return Err(AppError::Extraction(
            "no readable text found in page".to_string(),
        ));
    }

    Ok(truncate_chars(text, max_chars))
}

/// Append the text of an element's descendants, skipping non-content
/// subtrees wherever they are nested.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !matches!(
                child_element.value().name(),
                "script" | "style" | "noscript"
            ) {
                collect_text(child_element, out);
            }
        }
    }
}

/// Cut at a character count, never inside a multi-byte character.
fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}
