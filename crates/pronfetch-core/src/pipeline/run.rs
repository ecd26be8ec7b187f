//! The per-word loop: sanitize → provider → writer, one word at a time.

use super::{ProgressEvent, RunSummary, WordOutcome};
use crate::error::WordError;
use crate::naming::{output_file_name, sanitize_word};
use crate::provider::AudioProvider;
use crate::storage;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::Sender;

/// Handles one word. The name is checked before the provider runs so a word
/// that could never be saved costs no network round trip.
pub fn process_word<P: AudioProvider + ?Sized>(
    word: &str,
    provider: &P,
    output_dir: &Path,
) -> Result<PathBuf, WordError> {
    let name = sanitize_word(word).ok_or_else(|| WordError::EmptyFilename {
        word: word.to_string(),
    })?;
    let audio = provider.fetch_audio(word)?;
    let file_name = output_file_name(&name, provider.file_suffix());
    storage::write_audio(output_dir, &file_name, &audio).map_err(|source| {
        WordError::WriteFailed {
            word: word.to_string(),
            path: output_dir.join(&file_name),
            source,
        }
    })
}

/// Runs every word in order. Never aborts: each word's failure is logged,
/// reported on `progress_tx`, and counted.
///
/// Blocking; call from `spawn_blocking` if used from async code (the channel is
/// fed with `blocking_send`).
pub fn run_words<P: AudioProvider + ?Sized>(
    words: &[String],
    provider: &P,
    output_dir: &Path,
    progress_tx: Option<&Sender<ProgressEvent>>,
) -> RunSummary {
    let total = words.len();
    let mut summary = RunSummary::default();

    if total > 0 {
        prepare_output_dir(output_dir, progress_tx);
    }
    if let Some(tx) = progress_tx {
        let _ = tx.blocking_send(ProgressEvent::Started {
            total,
            source: provider.label(),
        });
    }

    for (i, word) in words.iter().enumerate() {
        let outcome = WordOutcome::from_result(process_word(word, provider, output_dir));
        log_outcome(word, &outcome);
        summary.record(&outcome);

        if let Some(tx) = progress_tx {
            let event = ProgressEvent::Word {
                index: i + 1,
                total,
                word: word.clone(),
                outcome,
            };
            if tx.blocking_send(event).is_err() {
                tracing::debug!("progress receiver dropped");
            }
        }
    }

    tracing::info!(
        total = summary.total,
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "run completed"
    );
    summary
}

/// Creates the folder up front so its creation is reported once. On error the
/// run goes on and each write reports its own failure.
fn prepare_output_dir(output_dir: &Path, progress_tx: Option<&Sender<ProgressEvent>>) {
    match storage::ensure_output_dir(output_dir) {
        Ok(true) => {
            tracing::info!("created output folder: {}", output_dir.display());
            if let Some(tx) = progress_tx {
                let _ = tx.blocking_send(ProgressEvent::OutputFolderCreated {
                    path: output_dir.to_path_buf(),
                });
            }
        }
        Ok(false) => {}
        Err(e) => tracing::warn!("cannot create output folder {}: {}", output_dir.display(), e),
    }
}

fn log_outcome(word: &str, outcome: &WordOutcome) {
    match outcome {
        WordOutcome::Written(path) => tracing::debug!(word, path = %path.display(), "saved"),
        WordOutcome::Skipped(e) => tracing::info!(word, "skipped: {}", e),
        WordOutcome::Failed(e) => tracing::warn!(word, "failed: {}", e),
    }
}
