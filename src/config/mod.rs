use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub max_pages: usize,
    pub max_content_chars: usize,
    pub discovery_enabled: bool,
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            openai_api_key: env::var("OPENAI_API_KEY")?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            max_pages: env::var("SCAN_MAX_PAGES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3)
                .max(1),
            max_content_chars: env::var("SCAN_MAX_CONTENT_CHARS")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000)
                .max(1),
            discovery_enabled: env::var("SCAN_DISCOVERY_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
