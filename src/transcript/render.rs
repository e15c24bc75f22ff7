//! Transcript rendering and file output.

use super::SpeakerLine;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render speaker lines as `Speaker {id}: {text}`, newline-joined.
/// Downstream consumers match on this exact format.
pub fn render_lines<S: Display>(lines: &[SpeakerLine<S>]) -> String {
    lines
        .iter()
        .map(|line| format!("Speaker {}: {}", line.speaker, line.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered transcript to a text file, one line per speaker turn.
pub fn write_transcript<S: Display>(path: &Path, lines: &[SpeakerLine<S>]) -> Result<(), String> {
    let mut file = File::create(path).map_err(|e| e.to_string())?;
    for line in lines {
        writeln!(file, "Speaker {}: {}", line.speaker, line.text).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_speaker_prefix_per_line() {
        let lines = vec![
            SpeakerLine {
                speaker: 0u32,
                text: "hi there".to_string(),
            },
            SpeakerLine {
                speaker: 1u32,
                text: "yo".to_string(),
            },
        ];
        assert_eq!(render_lines(&lines), "Speaker 0: hi there\nSpeaker 1: yo");
    }

    #[test]
    fn renders_empty_input_as_empty_string() {
        assert_eq!(render_lines::<u32>(&[]), "");
    }

    #[test]
    fn writes_one_line_per_turn() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("render_test_{}.txt", uuid::Uuid::new_v4()));
        let lines = vec![SpeakerLine {
            speaker: 3u32,
            text: "final words".to_string(),
        }];
        write_transcript(&path, &lines).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Speaker 3: final words\n");
        let _ = std::fs::remove_file(&path);
    }
}
