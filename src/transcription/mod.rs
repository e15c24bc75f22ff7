//! Audio extraction and the Deepgram transcription backend.

mod audio_extract;
mod deepgram;

pub use audio_extract::{extract_audio, ffmpeg_installed, ExtractedAudio};
pub use deepgram::{
    first_alternative_words, Alternative, Channel, DeepgramClient, PrerecordedResponse,
    Transcription, TranscriptionResults, Word,
};
