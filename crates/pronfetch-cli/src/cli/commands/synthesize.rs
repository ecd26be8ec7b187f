//! `pronfetch synthesize <csv>` – generate pronunciations with text-to-speech.

use anyhow::Result;
use pronfetch_core::config::PronfetchConfig;
use pronfetch_core::provider::SynthProvider;
use std::path::Path;

use super::run::run_pipeline;

pub async fn run_synthesize(
    cfg: &PronfetchConfig,
    csv_path: &Path,
    output_folder: &Path,
) -> Result<()> {
    let provider = SynthProvider::new(&cfg.synth)?;
    run_pipeline(provider, csv_path, output_folder).await?;
    println!("MP3 generation process completed.");
    Ok(())
}
