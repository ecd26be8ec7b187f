//! Failure taxonomy for a run.
//!
//! [`SourceError`] is fatal and ends the run before any word is processed.
//! [`WordError`] is per word: the pipeline logs it and moves on.

use crate::http::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// The word list could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("CSV file not found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("error reading CSV file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Why a single word produced no output file.
#[derive(Debug, Error)]
pub enum WordError {
    #[error("word '{word}' results in an empty URL component after sanitization")]
    EmptySlug { word: String },
    #[error("word '{word}' results in an empty filename after sanitization")]
    EmptyFilename { word: String },
    #[error("audio not found for '{word}' with '{accent}' accent (URL: {url})")]
    AudioNotFound {
        word: String,
        accent: String,
        url: String,
    },
    #[error("error downloading audio for '{word}': {source} (URL: {url})")]
    FetchFailed {
        word: String,
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("error generating MP3 for '{word}': {source}")]
    SynthesisFailed {
        word: String,
        #[source]
        source: FetchError,
    },
    #[error("error writing {} for '{word}': {source}", .path.display())]
    WriteFailed {
        word: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordError {
    /// Skips mean the word has nothing to fetch; failures mean an attempt went wrong.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            WordError::EmptySlug { .. }
                | WordError::EmptyFilename { .. }
                | WordError::AudioNotFound { .. }
        )
    }

    pub fn word(&self) -> &str {
        match self {
            WordError::EmptySlug { word }
            | WordError::EmptyFilename { word }
            | WordError::AudioNotFound { word, .. }
            | WordError::FetchFailed { word, .. }
            | WordError::SynthesisFailed { word, .. }
            | WordError::WriteFailed { word, .. } => word,
        }
    }
}
