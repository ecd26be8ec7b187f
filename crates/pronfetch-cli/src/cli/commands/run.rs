//! Shared driver: run the blocking pipeline off the async runtime and print progress.

use anyhow::{Context, Result};
use pronfetch_core::pipeline::{self, ProgressEvent, RunReport};
use pronfetch_core::provider::AudioProvider;
use std::path::Path;

use super::progress::print_progress;

pub(super) async fn run_pipeline<P>(provider: P, csv_path: &Path, output_folder: &Path) -> Result<()>
where
    P: AudioProvider + Send + 'static,
{
    let (progress_tx, progress_rx) = tokio::sync::mpsc::channel::<ProgressEvent>(16);
    let progress_handle = tokio::spawn(print_progress(progress_rx));

    let csv = csv_path.to_path_buf();
    let out = output_folder.to_path_buf();
    let report = tokio::task::spawn_blocking(move || {
        pipeline::run_from_csv(&csv, &provider, &out, Some(&progress_tx))
    })
    .await
    .context("pipeline task panicked")?;

    let _ = progress_handle.await;

    match report? {
        RunReport::NoWords => println!("No words found in the CSV file."),
        RunReport::Completed(summary) => {
            println!(
                "Processed {} word(s): {} saved, {} skipped, {} failed. Output folder: {}",
                summary.total,
                summary.written,
                summary.skipped,
                summary.failed,
                output_folder.display()
            );
        }
    }
    Ok(())
}
