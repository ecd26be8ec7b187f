//! Run orchestration: load the word list, then drive one provider over it.
//!
//! Loading failures are fatal and surface before any word is touched. After
//! that every failure is scoped to its word; the run always reaches the end.

mod outcome;
mod progress;
mod run;

pub use outcome::{RunReport, RunSummary, WordOutcome};
pub use progress::ProgressEvent;
pub use run::{process_word, run_words};

use crate::error::SourceError;
use crate::provider::AudioProvider;
use crate::words;
use std::path::Path;
use tokio::sync::mpsc::Sender;

/// Loads `csv_path` and runs every word through `provider` into `output_dir`.
///
/// Returns `Err` only when the word list cannot be loaded. An empty list gives
/// [`RunReport::NoWords`] without creating anything.
pub fn run_from_csv<P: AudioProvider + ?Sized>(
    csv_path: &Path,
    provider: &P,
    output_dir: &Path,
    progress_tx: Option<&Sender<ProgressEvent>>,
) -> Result<RunReport, SourceError> {
    let words = words::load_words(csv_path)?;
    if words.is_empty() {
        tracing::info!(path = %csv_path.display(), "no words found");
        return Ok(RunReport::NoWords);
    }
    let summary = run_words(&words, provider, output_dir, progress_tx);
    Ok(RunReport::Completed(summary))
}
