//! Speaker-turn segmentation and transcript rendering.

mod clean;
mod render;
mod segment;

pub use clean::strip_filler_words;
pub use render::{render_lines, write_transcript};
pub use segment::{segment, SpeakerLine, WordToken};
