//! Progress events sent from the pipeline to the CLI.

use super::WordOutcome;
use std::path::PathBuf;

/// Sent once before the first word, then once per word after it is handled.
/// `OutputFolderCreated` comes first when the run had to create the folder.
#[derive(Debug)]
pub enum ProgressEvent {
    OutputFolderCreated {
        path: PathBuf,
    },
    Started {
        total: usize,
        /// Provider description, e.g. "dictionary.cambridge.org (UK accent)".
        source: String,
    },
    Word {
        /// 1-based position of this word in the run.
        index: usize,
        total: usize,
        word: String,
        outcome: WordOutcome,
    },
}

impl ProgressEvent {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        match self {
            ProgressEvent::OutputFolderCreated { .. } | ProgressEvent::Started { .. } => 0.0,
            ProgressEvent::Word { index, total, .. } => {
                if *total == 0 {
                    return 1.0;
                }
                (*index as f64 / *total as f64).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction() {
        let started = ProgressEvent::Started {
            total: 4,
            source: "x".into(),
        };
        assert_eq!(started.fraction(), 0.0);
        let word = ProgressEvent::Word {
            index: 1,
            total: 4,
            word: "a".into(),
            outcome: WordOutcome::Written(PathBuf::from("a.mp3")),
        };
        assert!((word.fraction() - 0.25).abs() < 1e-9);
    }
}
