//! Vimeo API integration.

mod client;

pub use client::{VideoMetadata, VimeoClient};
