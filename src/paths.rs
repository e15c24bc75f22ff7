//! Path utilities for the data, downloads, transcripts and logs directories.

use std::path::PathBuf;

/// Application data directory (e.g. ~/.local/share/vimeo-scribe).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("vimeo-scribe"))
        .unwrap_or_else(|| PathBuf::from(".").join("vimeo-scribe"))
}

/// Directory downloaded videos land in, created if necessary.
pub fn downloads_dir() -> Result<PathBuf, String> {
    let dir = data_dir().join("downloads");
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

/// Directory transcripts (raw JSON and rendered text) land in, created if
/// necessary.
pub fn transcripts_dir() -> Result<PathBuf, String> {
    let dir = data_dir().join("transcripts");
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

/// Log file path, creating the logs directory if necessary.
pub fn log_file_path() -> Result<PathBuf, String> {
    let dir = data_dir().join("logs");
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir.join("vimeo-scribe.log"))
}

/// Ensure all application directories exist.
pub fn ensure_directories() -> Result<(), String> {
    downloads_dir()?;
    transcripts_dir()?;
    let _ = log_file_path();
    Ok(())
}
