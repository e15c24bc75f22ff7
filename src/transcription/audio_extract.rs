//! Extract the audio track from a downloaded video with ffmpeg.

use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of audio extraction. `is_temporary` marks files the pipeline
/// should delete once transcription is done.
pub struct ExtractedAudio {
    pub path: PathBuf,
    pub is_temporary: bool,
}

/// True when a system ffmpeg binary is available on PATH.
pub fn ffmpeg_installed() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Extract the audio track of an MP4 into a sibling `{stem}_audio.m4a`
/// file and return its path. Inputs that are not MP4 are passed through
/// untouched, since Deepgram accepts them directly.
pub fn extract_audio(input: &Path) -> Result<ExtractedAudio, String> {
    if !input.exists() {
        return Err(format!("File not found: {}", input.to_string_lossy()));
    }

    let is_mp4 = input
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("mp4"));
    if !is_mp4 {
        return Ok(ExtractedAudio {
            path: input.to_path_buf(),
            is_temporary: false,
        });
    }

    if !ffmpeg_installed() {
        return Err("FFmpeg not found. Install FFmpeg and add it to PATH.".to_string());
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    let output_path = input.with_file_name(format!("{}_audio.m4a", stem));

    info!(
        "[extract] {} -> {}",
        input.to_string_lossy(),
        output_path.to_string_lossy()
    );
    let output = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-vn", "-acodec", "aac"])
        .arg(&output_path)
        .output()
        .map_err(|e| format!("Failed to run ffmpeg: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "Audio extraction failed - check FFmpeg installation or video file integrity: {}",
            stderr.trim()
        ));
    }

    Ok(ExtractedAudio {
        path: output_path,
        is_temporary: true,
    })
}
