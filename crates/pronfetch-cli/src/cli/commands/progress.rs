//! Terminal progress line plus per-word messages printed above it.

use pronfetch_core::pipeline::ProgressEvent;
use std::io::Write;
use tokio::sync::mpsc::Receiver;

/// Drains `progress_rx` until the pipeline drops its sender.
pub(super) async fn print_progress(mut progress_rx: Receiver<ProgressEvent>) {
    let mut line_len = 0usize;
    while let Some(event) = progress_rx.recv().await {
        let pct = event.fraction() * 100.0;
        match event {
            ProgressEvent::OutputFolderCreated { path } => {
                println!("Created output folder: {}", path.display());
            }
            ProgressEvent::Started { total, source } => {
                println!("Found {} words. Starting MP3 generation from {}...", total, source);
            }
            ProgressEvent::Word {
                index,
                total,
                word,
                outcome,
            } => {
                if let Some(e) = outcome.error() {
                    clear_line(line_len);
                    eprintln!("{}", e);
                }
                let line = format!("Processing words: {}/{} ({:.0}%) {}", index, total, pct, word);
                clear_line(line_len);
                eprint!("{}", line);
                let _ = std::io::stderr().flush();
                line_len = line.chars().count();
            }
        }
    }
    if line_len > 0 {
        eprintln!();
    }
}

fn clear_line(len: usize) {
    if len > 0 {
        eprint!("\r{}\r", " ".repeat(len));
    }
}
