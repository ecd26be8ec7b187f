//! Audio providers: the interchangeable strategies that turn a word into MP3 bytes.
//!
//! The pipeline only depends on [`AudioProvider`] and does not know whether
//! audio comes from a dictionary page or a speech synthesizer.

mod accent;
mod chunk;
mod page;
mod scrape;
mod synth;

pub use accent::{Accent, AccentParseError};
pub use chunk::{split_text, MAX_CHUNK_CHARS};
pub use page::find_audio_src;
pub use scrape::ScrapeProvider;
pub use synth::SynthProvider;

use crate::error::WordError;

/// One MP3 file's worth of bytes, passed to the writer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBytes(Vec<u8>);

impl AudioBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Trait implemented by each audio source.
pub trait AudioProvider {
    /// Human-readable source description for the start-of-run message.
    fn label(&self) -> String;

    /// Tag appended to output file names (`<name>_<suffix>.mp3`), if any.
    fn file_suffix(&self) -> Option<&str>;

    /// Produces audio for one word. A single attempt; no retries.
    fn fetch_audio(&self, word: &str) -> Result<AudioBytes, WordError>;
}
