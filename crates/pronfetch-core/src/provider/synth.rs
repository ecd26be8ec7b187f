//! Speech synthesis through the Google Translate TTS endpoint.

use super::{split_text, AudioBytes, AudioProvider, MAX_CHUNK_CHARS};
use crate::config::SynthConfig;
use crate::error::WordError;
use crate::http::{self, HttpOptions};
use anyhow::{Context, Result};
use url::Url;

/// Synthesizes each word with a regional voice selected by the host TLD.
#[derive(Debug, Clone)]
pub struct SynthProvider {
    endpoint: Url,
    tld: String,
    lang: String,
    http: HttpOptions,
}

impl SynthProvider {
    pub fn new(config: &SynthConfig) -> Result<Self> {
        let endpoint_str = config.endpoint();
        let endpoint = Url::parse(&endpoint_str)
            .with_context(|| format!("invalid synth endpoint: {}", endpoint_str))?;
        Ok(Self {
            endpoint,
            tld: config.tld.clone(),
            lang: config.lang.clone(),
            http: HttpOptions::new(config.user_agent.clone(), config.timeout()),
        })
    }

    /// Request URL for chunk `idx` of `total`.
    pub fn chunk_url(&self, chunk: &str, idx: usize, total: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("ie", "UTF-8")
            .append_pair("q", chunk)
            .append_pair("tl", &self.lang)
            .append_pair("total", &total.to_string())
            .append_pair("idx", &idx.to_string())
            .append_pair("textlen", &chunk.chars().count().to_string())
            .append_pair("client", "tw-ob");
        url
    }
}

impl AudioProvider for SynthProvider {
    fn label(&self) -> String {
        format!("Google TTS (lang={}, tld={})", self.lang, self.tld)
    }

    fn file_suffix(&self) -> Option<&str> {
        None
    }

    fn fetch_audio(&self, word: &str) -> Result<AudioBytes, WordError> {
        let chunks = split_text(word, MAX_CHUNK_CHARS);
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, idx, chunks.len());
            let bytes = http::get(url.as_str(), &self.http).map_err(|source| {
                WordError::SynthesisFailed {
                    word: word.to_string(),
                    source,
                }
            })?;
            audio.extend_from_slice(&bytes);
        }
        tracing::debug!(word, chunks = chunks.len(), bytes = audio.len(), "synthesized");
        Ok(AudioBytes::new(audio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_url_encodes_query() {
        let p = SynthProvider::new(&SynthConfig::default()).unwrap();
        let url = p.chunk_url("ice cream", 0, 1);
        assert_eq!(url.host_str(), Some("translate.google.co.uk"));
        assert_eq!(url.path(), "/translate_tts");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("q".to_string(), "ice cream".to_string())));
        assert!(pairs.contains(&("tl".to_string(), "en".to_string())));
        assert!(pairs.contains(&("textlen".to_string(), "9".to_string())));
        assert!(pairs.contains(&("client".to_string(), "tw-ob".to_string())));
    }

    #[test]
    fn no_suffix_and_label() {
        let cfg = SynthConfig {
            tld: "com".to_string(),
            ..SynthConfig::default()
        };
        let p = SynthProvider::new(&cfg).unwrap();
        assert_eq!(p.file_suffix(), None);
        assert_eq!(p.label(), "Google TTS (lang=en, tld=com)");
    }
}
