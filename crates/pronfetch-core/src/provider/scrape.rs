//! Dictionary scraping: entry page → embedded clip → MP3 bytes.

use super::{find_audio_src, Accent, AudioBytes, AudioProvider};
use crate::config::ScrapeConfig;
use crate::error::WordError;
use crate::http::{self, FetchError, HttpOptions};
use crate::naming::url_slug;
use anyhow::{Context, Result};
use url::Url;

/// Fetches pronunciation clips from a dictionary site (Cambridge by default).
#[derive(Debug, Clone)]
pub struct ScrapeProvider {
    base: Url,
    entry_path: String,
    http: HttpOptions,
    accent: Accent,
}

impl ScrapeProvider {
    /// Fails only if `config.base_url` is not an absolute URL.
    pub fn new(config: &ScrapeConfig, accent: Accent) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .with_context(|| format!("invalid scrape base_url: {}", config.base_url))?;
        Ok(Self {
            base,
            entry_path: config.entry_path.clone(),
            http: HttpOptions::new(config.user_agent.clone(), config.timeout()),
            accent,
        })
    }

    /// Entry page URL for a (non-empty) slug.
    pub fn entry_url(&self, slug: &str) -> Result<Url, url::ParseError> {
        self.base.join(&format!("{}{}", self.entry_path, slug))
    }

    fn get(&self, word: &str, url: &Url) -> Result<Vec<u8>, WordError> {
        http::get(url.as_str(), &self.http).map_err(|source| WordError::FetchFailed {
            word: word.to_string(),
            url: url.to_string(),
            source,
        })
    }
}

impl AudioProvider for ScrapeProvider {
    fn label(&self) -> String {
        format!(
            "{} ({} accent)",
            self.base.host_str().unwrap_or("dictionary"),
            self.accent.as_str().to_uppercase()
        )
    }

    fn file_suffix(&self) -> Option<&str> {
        Some(self.accent.as_str())
    }

    fn fetch_audio(&self, word: &str) -> Result<AudioBytes, WordError> {
        let slug = url_slug(word);
        if slug.is_empty() {
            return Err(WordError::EmptySlug {
                word: word.to_string(),
            });
        }

        let page_url = self.entry_url(&slug).map_err(|e| WordError::FetchFailed {
            word: word.to_string(),
            url: format!("{}{}", self.entry_path, slug),
            source: FetchError::Url(e),
        })?;
        let page = self.get(word, &page_url)?;
        let html = String::from_utf8_lossy(&page);

        let src = find_audio_src(&html, self.accent).ok_or_else(|| WordError::AudioNotFound {
            word: word.to_string(),
            accent: self.accent.to_string(),
            url: page_url.to_string(),
        })?;

        let audio_url = self.base.join(&src).map_err(|e| WordError::FetchFailed {
            word: word.to_string(),
            url: src.clone(),
            source: FetchError::Url(e),
        })?;
        tracing::debug!(word, url = %audio_url, "found audio clip");
        let bytes = self.get(word, &audio_url)?;
        Ok(AudioBytes::new(bytes))
    }
}
