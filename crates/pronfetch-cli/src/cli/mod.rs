//! CLI for pronfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pronfetch_core::config;
use pronfetch_core::provider::Accent;
use std::path::PathBuf;

use commands::{run_scrape, run_synthesize};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pronfetch")]
#[command(about = "pronfetch: turn a CSV word list into pronunciation MP3 files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download pronunciations from Cambridge Dictionary.
    Scrape {
        /// Path to the input CSV file; every field is a word.
        csv_filepath: PathBuf,

        /// Folder to save the output MP3 files (default from config: output_mp3s).
        #[arg(short = 'o', long, alias = "output_folder", value_name = "DIR")]
        output_folder: Option<PathBuf>,

        /// Pronunciation accent: 'uk' for British, 'us' for American.
        #[arg(short = 'a', long, default_value_t = Accent::Uk)]
        accent: Accent,
    },

    /// Generate pronunciations with Google Text-to-Speech (British English by default).
    Synthesize {
        /// Path to the input CSV file; every field is a word.
        csv_filepath: PathBuf,

        /// Folder to save the output MP3 files (default from config: output_mp3s).
        #[arg(short = 'o', long, alias = "output_folder", value_name = "DIR")]
        output_folder: Option<PathBuf>,

        /// Google host TLD selecting the regional voice, e.g. "co.uk" or "com".
        #[arg(long)]
        tld: Option<String>,

        /// Language code of the voice.
        #[arg(long)]
        lang: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scrape {
                csv_filepath,
                output_folder,
                accent,
            } => {
                let out = output_folder.unwrap_or_else(|| cfg.output_folder.clone());
                run_scrape(&cfg, &csv_filepath, &out, accent).await?;
            }
            CliCommand::Synthesize {
                csv_filepath,
                output_folder,
                tld,
                lang,
            } => {
                if let Some(tld) = tld {
                    cfg.synth.tld = tld;
                }
                if let Some(lang) = lang {
                    cfg.synth.lang = lang;
                }
                let out = output_folder.unwrap_or_else(|| cfg.output_folder.clone());
                run_synthesize(&cfg, &csv_filepath, &out).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
