//! Profile document generation via an OpenAI-compatible completion API.

use serde_json::json;

const SYSTEM_PROMPT: &str = "You write bio-psycho-social business profiles from call transcripts. \
Return Markdown with Bio, Psycho, Social, Business Needs and Opportunities sections, \
grounded only in what the metadata and transcript actually say.";

/// Owns the HTTP client and credentials for the completion endpoint.
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ProfileClient {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    /// Generate a profile document from video metadata and a speaker-turn
    /// transcript. POSTs to `{base_url}/chat/completions`.
    pub async fn generate_profile(
        &self,
        metadata: &str,
        transcript: &str,
    ) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("{}\n\nTranscript:\n{}", metadata, transcript) },
            ],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("API error {}: {}", status, body));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        let text = json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        if text.is_empty() {
            return Err("Completion response contained no content".to_string());
        }
        Ok(text)
    }
}
