use crate::error::WordError;
use std::path::PathBuf;

/// What happened to one word.
#[derive(Debug)]
pub enum WordOutcome {
    Written(PathBuf),
    /// Nothing to fetch for this word (empty name or slug, no clip on the page).
    Skipped(WordError),
    Failed(WordError),
}

impl WordOutcome {
    pub fn from_result(result: Result<PathBuf, WordError>) -> Self {
        match result {
            Ok(path) => WordOutcome::Written(path),
            Err(e) if e.is_skip() => WordOutcome::Skipped(e),
            Err(e) => WordOutcome::Failed(e),
        }
    }

    pub fn error(&self) -> Option<&WordError> {
        match self {
            WordOutcome::Written(_) => None,
            WordOutcome::Skipped(e) | WordOutcome::Failed(e) => Some(e),
        }
    }
}

/// Counts for the completion message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &WordOutcome) {
        self.total += 1;
        match outcome {
            WordOutcome::Written(_) => self.written += 1,
            WordOutcome::Skipped(_) => self.skipped += 1,
            WordOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Result of a whole run that got past loading the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunReport {
    /// The word list was empty; nothing was attempted.
    NoWords,
    Completed(RunSummary),
}
