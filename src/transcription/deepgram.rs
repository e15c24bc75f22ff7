//! Deepgram prerecorded (batch) transcription API.

use crate::transcript::WordToken;
use log::info;
use serde::Deserialize;
use std::path::Path;

const API_URL: &str = "https://api.deepgram.com/v1/listen";

/// Options sent with every upload. Diarization is what feeds the
/// speaker-turn segmenter; the rest mirrors the provider's smart
/// formatting defaults.
const TRANSCRIPTION_OPTIONS: &[(&str, &str)] = &[
    ("model", "nova-3"),
    ("smart_format", "true"),
    ("punctuate", "true"),
    ("paragraphs", "true"),
    ("utterances", "true"),
    ("diarize", "true"),
    ("filler_words", "true"),
    ("detect_entities", "true"),
];

/// Response envelope: `results.channels[].alternatives[].words[]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrerecordedResponse {
    #[serde(default)]
    pub results: Option<TranscriptionResults>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResults {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub words: Vec<Word>,
}

/// One word record. Every field is optional so a single malformed word
/// deserializes instead of failing the whole response; the segmenter
/// skips the ones it cannot use.
#[derive(Debug, Clone, Deserialize)]
pub struct Word {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub punctuated_word: Option<String>,
    #[serde(default)]
    pub speaker: Option<u32>,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl From<Word> for WordToken<u32> {
    fn from(w: Word) -> Self {
        WordToken {
            speaker: w.speaker,
            // Prefer the smart-formatted word when the provider sent one.
            text: w.punctuated_word.or(w.word),
        }
    }
}

/// The word list of the first alternative of the first channel - the
/// slice the segmenter consumes.
pub fn first_alternative_words(response: &PrerecordedResponse) -> &[Word] {
    response
        .results
        .as_ref()
        .and_then(|r| r.channels.first())
        .and_then(|c| c.alternatives.first())
        .map(|a| a.words.as_slice())
        .unwrap_or(&[])
}

/// Parsed response plus the raw JSON body, so the pipeline can persist
/// the full provider output alongside the rendered transcript.
pub struct Transcription {
    pub raw_json: String,
    pub response: PrerecordedResponse,
}

/// Owns the HTTP client and API key; constructed once at startup and
/// passed to the pipeline (no ambient global client).
pub struct DeepgramClient {
    http: reqwest::Client,
    api_key: String,
}

impl DeepgramClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.trim().to_string(),
        }
    }

    /// Upload an audio file and return the parsed transcription.
    pub async fn transcribe_file(
        &self,
        audio_path: &Path,
        mimetype: &str,
    ) -> Result<Transcription, String> {
        let bytes = std::fs::read(audio_path).map_err(|e| e.to_string())?;
        info!(
            "[deepgram] uploading {} ({:.2} MB)",
            audio_path.to_string_lossy(),
            bytes.len() as f64 / 1_000_000.0
        );

        let response = self
            .http
            .post(API_URL)
            .query(TRANSCRIPTION_OPTIONS)
            .header("Content-Type", mimetype)
            .header("Authorization", format!("Token {}", self.api_key))
            .body(bytes)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Deepgram API error {}: {}", status, body));
        }

        let raw_json = response.text().await.map_err(|e| e.to_string())?;
        let response: PrerecordedResponse = serde_json::from_str(&raw_json)
            .map_err(|e| format!("Failed to parse Deepgram response: {}", e))?;

        info!("[deepgram] transcription complete");
        Ok(Transcription { raw_json, response })
    }
}
