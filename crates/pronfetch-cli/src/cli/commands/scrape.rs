//! `pronfetch scrape <csv>` – download pronunciations from the dictionary site.

use anyhow::Result;
use pronfetch_core::config::PronfetchConfig;
use pronfetch_core::provider::{Accent, ScrapeProvider};
use std::path::Path;

use super::run::run_pipeline;

pub async fn run_scrape(
    cfg: &PronfetchConfig,
    csv_path: &Path,
    output_folder: &Path,
    accent: Accent,
) -> Result<()> {
    let provider = ScrapeProvider::new(&cfg.scrape, accent)?;
    run_pipeline(provider, csv_path, output_folder).await?;
    println!("MP3 download process completed.");
    Ok(())
}
