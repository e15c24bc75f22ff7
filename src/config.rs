//! Environment configuration, loaded from the process environment
//! (optionally seeded from a `.env` file).

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub vimeo_access_token: String,
    pub deepgram_api_key: String,
    /// When unset, profile generation is disabled.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub bind_addr: String,
    /// Filler words stripped from transcript lines. Empty = disabled.
    pub filler_words: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            vimeo_access_token: require("VIMEO_ACCESS_TOKEN")?,
            deepgram_api_key: require("DEEPGRAM_API_KEY")?,
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_model: optional("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:5000".to_string()),
            filler_words: parse_filler_words(&optional("FILLER_WORDS").unwrap_or_default()),
        })
    }
}

fn require(key: &str) -> Result<String, String> {
    optional(key).ok_or_else(|| format!("Missing {} in environment (set it in .env)", key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a comma-separated filler word list, e.g. "um, uh, essentially".
fn parse_filler_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
