//! The fetch metadata -> download -> extract -> transcribe -> segment
//! pipeline.

use crate::config::Config;
use crate::paths;
use crate::profile::ProfileClient;
use crate::transcript::{self, WordToken};
use crate::transcription::{extract_audio, first_alternative_words, DeepgramClient};
use crate::vimeo::VimeoClient;
use log::{info, warn};
use std::path::PathBuf;

/// Holds the external-service clients. Constructed once at startup with
/// explicit ownership; nothing here is process-global.
pub struct Pipeline {
    vimeo: VimeoClient,
    deepgram: DeepgramClient,
    profile: Option<ProfileClient>,
    filler_words: Vec<String>,
}

pub struct PipelineOutput {
    pub metadata: String,
    pub transcript: String,
    pub transcript_path: PathBuf,
    pub response_json_path: PathBuf,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        let profile = config.openai_api_key.clone().map(|key| {
            ProfileClient::new(
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                key,
            )
        });
        Self {
            vimeo: VimeoClient::new(config.vimeo_access_token.clone()),
            deepgram: DeepgramClient::new(config.deepgram_api_key.clone()),
            profile,
            filler_words: config.filler_words.clone(),
        }
    }

    /// Run the full pipeline for one video id. Each step failure surfaces
    /// as its own descriptive error; a failed step never leaves partial
    /// transcript output behind.
    pub async fn run(&self, video_id: &str) -> Result<PipelineOutput, String> {
        let metadata = self.vimeo.fetch_metadata(video_id).await?;
        let metadata_text = metadata.as_string();
        info!("[pipeline] fetched metadata for {}", video_id);

        let downloads = paths::downloads_dir()?;
        let video_path = self.vimeo.download_video(video_id, &downloads).await?;

        let audio = extract_audio(&video_path)?;
        let transcription = self.deepgram.transcribe_file(&audio.path, "audio/mp4").await;
        if audio.is_temporary {
            if let Err(e) = std::fs::remove_file(&audio.path) {
                warn!(
                    "[pipeline] could not delete temp audio {}: {}",
                    audio.path.to_string_lossy(),
                    e
                );
            }
        }
        let transcription = transcription?;

        let transcripts = paths::transcripts_dir()?;
        let response_json_path =
            transcripts.join(format!("{}_{}_transcript.json", video_id, uuid::Uuid::new_v4()));
        std::fs::write(&response_json_path, &transcription.raw_json)
            .map_err(|e| e.to_string())?;
        info!(
            "[pipeline] raw transcription saved to {}",
            response_json_path.to_string_lossy()
        );

        let tokens: Vec<WordToken<u32>> = first_alternative_words(&transcription.response)
            .iter()
            .cloned()
            .map(WordToken::from)
            .collect();
        let mut lines = transcript::segment(tokens);
        if !self.filler_words.is_empty() {
            for line in &mut lines {
                line.text = transcript::strip_filler_words(&line.text, &self.filler_words);
            }
            lines.retain(|l| !l.text.is_empty());
        }

        let transcript_path = transcripts.join(format!("{}_transcript.txt", video_id));
        transcript::write_transcript(&transcript_path, &lines)?;
        info!(
            "[pipeline] transcript with {} speaker turns saved to {}",
            lines.len(),
            transcript_path.to_string_lossy()
        );

        Ok(PipelineOutput {
            metadata: metadata_text,
            transcript: transcript::render_lines(&lines),
            transcript_path,
            response_json_path,
        })
    }

    /// Generate the optional profile document from a pipeline run's output.
    pub async fn generate_profile(
        &self,
        metadata: &str,
        transcript: &str,
    ) -> Result<String, String> {
        match &self.profile {
            Some(client) => client.generate_profile(metadata, transcript).await,
            None => Err("Profile generation not configured (set OPENAI_API_KEY)".to_string()),
        }
    }
}
