//! Vimeo API client: metadata fetch and rendition download.

use futures_util::StreamExt;
use log::info;
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

const API_BASE: &str = "https://api.vimeo.com";

/// Title and description of a Vimeo video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl VideoMetadata {
    /// Render as `Title: {name}\n\nDescription:\n{description}` - the form
    /// handed to the profile generator and returned by the pipeline.
    pub fn as_string(&self) -> String {
        let title = self.name.as_deref().unwrap_or("").trim();
        let description = self.description.as_deref().unwrap_or("").trim();
        format!("Title: {}\n\nDescription:\n{}", title, description)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct VideoInfo {
    #[serde(default)]
    download: Vec<DownloadLink>,
}

/// One downloadable rendition from the video's `download` array.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadLink {
    pub quality: String,
    pub height: Option<u64>,
    pub link: String,
}

/// Owns the HTTP client and access token; constructed once at startup and
/// passed to the pipeline (no ambient global client).
pub struct VimeoClient {
    http: reqwest::Client,
    access_token: String,
}

impl VimeoClient {
    pub fn new(access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.trim().to_string(),
        }
    }

    /// Fetch title and description for a video.
    pub async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, String> {
        let url = format!("{}/videos/{}", API_BASE, video_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("fields", "name,description")])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Vimeo metadata request failed ({}): {}", status, body));
        }

        response
            .json::<VideoMetadata>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Download the lowest-resolution MP4 rendition into `dir`.
    /// Returns the path of the written file.
    pub async fn download_video(&self, video_id: &str, dir: &Path) -> Result<PathBuf, String> {
        let url = format!("{}/videos/{}", API_BASE, video_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Vimeo video lookup failed ({}): {}", status, body));
        }

        let info: VideoInfo = response.json().await.map_err(|e| e.to_string())?;
        let link =
            pick_lowest_rendition(&info.download).ok_or("No downloadable links; check Vimeo token scopes.")?;

        let file_name = format!(
            "{}_{}_{}p.mp4",
            video_id,
            link.quality,
            link.height.unwrap_or(0)
        );
        let output_path = dir.join(file_name);

        let response = self
            .http
            .get(&link.link)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("Video download failed: {}", response.status()));
        }

        let mut stream = response.bytes_stream();
        let mut file = std::fs::File::create(&output_path).map_err(|e| e.to_string())?;
        let mut downloaded: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| e.to_string())?;
            file.write_all(&bytes).map_err(|e| e.to_string())?;
            downloaded += bytes.len() as u64;
        }

        info!(
            "[vimeo] downloaded {} ({} bytes)",
            output_path.to_string_lossy(),
            downloaded
        );
        Ok(output_path)
    }
}

/// Pick the lowest rendition by height; links without a height sort last.
fn pick_lowest_rendition(links: &[DownloadLink]) -> Option<&DownloadLink> {
    links.iter().min_by_key(|l| l.height.unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(quality: &str, height: Option<u64>) -> DownloadLink {
        DownloadLink {
            quality: quality.to_string(),
            height,
            link: format!("https://example.com/{}", quality),
        }
    }

    #[test]
    fn picks_the_lowest_height() {
        let links = vec![link("hd", Some(1080)), link("sd", Some(240)), link("sd", Some(360))];
        let picked = pick_lowest_rendition(&links).unwrap();
        assert_eq!(picked.height, Some(240));
    }

    #[test]
    fn links_without_height_lose_to_any_sized_link() {
        let links = vec![link("source", None), link("sd", Some(540))];
        let picked = pick_lowest_rendition(&links).unwrap();
        assert_eq!(picked.height, Some(540));
    }

    #[test]
    fn empty_download_array_yields_none() {
        assert!(pick_lowest_rendition(&[]).is_none());
    }

    #[test]
    fn metadata_string_trims_fields() {
        let meta = VideoMetadata {
            name: Some("  Intro Call ".to_string()),
            description: Some("Notes.\n".to_string()),
        };
        assert_eq!(meta.as_string(), "Title: Intro Call\n\nDescription:\nNotes.");
    }

    #[test]
    fn metadata_string_handles_missing_fields() {
        let meta = VideoMetadata {
            name: None,
            description: None,
        };
        assert_eq!(meta.as_string(), "Title: \n\nDescription:\n");
    }
}
