use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Browser-like identity sent with every request; the dictionary site rejects bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Dictionary scraping parameters (`[scrape]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Origin that entry pages and audio `src` paths are resolved against.
    pub base_url: String,
    /// Path prefix of an entry page; the word slug is appended to it.
    pub entry_path: String,
    pub user_agent: String,
    /// Per-request timeout in seconds (page and audio each get the full budget).
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dictionary.cambridge.org".to_string(),
            entry_path: "/dictionary/english/".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Speech synthesis parameters (`[synth]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Endpoint host; `{tld}` is replaced with `tld`.
    pub host_template: String,
    /// Google host top-level domain; selects the regional voice ("co.uk" British, "com" American).
    pub tld: String,
    /// Language code passed as `tl`.
    pub lang: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            host_template: "https://translate.google.{tld}".to_string(),
            tld: "co.uk".to_string(),
            lang: "en".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl SynthConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full `translate_tts` endpoint URL for the configured TLD.
    pub fn endpoint(&self) -> String {
        let host = self.host_template.replace("{tld}", &self.tld);
        format!("{}/translate_tts", host.trim_end_matches('/'))
    }
}

/// Global configuration loaded from `~/.config/pronfetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronfetchConfig {
    /// Folder MP3 files are written to when `-o` is not given.
    pub output_folder: PathBuf,
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub synth: SynthConfig,
}

impl Default for PronfetchConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("output_mp3s"),
            scrape: ScrapeConfig::default(),
            synth: SynthConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pronfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PronfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PronfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PronfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
