//! DEI policy summarization through the chat-completions endpoint.

use crate::errors::AppError;
use crate::models::scan::{PolicyReport, PolicySummary};
use crate::openai::{strip_code_blocks, ChatRequest, Message, OpenAiClient};

/// Low sampling temperature, favoring extraction over variation.
const TEMPERATURE: f32 = 0.3;

/// Output budget for one page's summary.
const MAX_TOKENS: u32 = 1000;

/// Persona instruction for the completion endpoint.
pub const SYSTEM_PROMPT: &str = "You are an assistant that extracts and summarizes \
     Diversity, Equity, and Inclusion policies from website content. Extract key \
     policies, commitments, initiatives, and goals related to DEI. If no DEI \
     content is found, state that clearly.";

/// Per-page task instruction, with the JSON shape the reply must use.
pub const SUMMARIZE_PROMPT: &str = r#"Below is text extracted from the website: {url}

Your task:
1. Identify DEI-related policies, statements, commitments, or initiatives in the content.
2. Summarize what the organization says about diversity, equity, and inclusion.
3. If no explicit DEI policy is found, state that and note any related signals about the organization's stance.

Output JSON:
{
    "summary": "2-3 sentence overview of the organization's DEI position",
    "findings": ["specific policies, commitments, or initiatives found"],
    "recommendations": ["suggested next steps or areas the organization could strengthen"]
}

Website content:
{content}"#;

/// Format the summarize prompt for one page.
pub fn format_summarize_prompt(url: &str, content: &str) -> String {
    SUMMARIZE_PROMPT
        .replace("{url}", url)
        .replace("{content}", content)
}

/// Summarize one page's extracted text into a structured report.
///
/// Endpoint failures surface as summarization errors; replies that do
/// not parse into the report shape surface as response-format errors.
/// No default summary is ever substituted.
pub async fn summarize_page(
    client: &OpenAiClient,
    model: &str,
    page_url: &str,
    content: &str,
) -> Result<PolicySummary, AppError> {
    let request = ChatRequest::new(model)
        .message(Message::system(SYSTEM_PROMPT))
        .message(Message::user(format_summarize_prompt(page_url, content)))
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS);

    let reply = client
        .chat_completion(request)
        .await
        .map_err(|e| AppError::Summarization(e.to_string()))?;

    Ok(PolicySummary {
        source_url: page_url.to_string(),
        content: parse_report(&reply)?,
    })
}

/// Parse a completion reply into a report, tolerating markdown fences.
fn parse_report(reply: &str) -> Result<PolicyReport, AppError> {
    serde_json::from_str(strip_code_blocks(reply))
        .map_err(|e| AppError::ResponseFormat(e.to_string()))
}
