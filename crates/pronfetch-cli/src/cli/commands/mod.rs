//! CLI command handlers. Each command is in its own file.

mod progress;
mod run;
mod scrape;
mod synthesize;

pub use scrape::run_scrape;
pub use synthesize::run_synthesize;
