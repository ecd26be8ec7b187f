use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Regional pronunciation to pick when a dictionary entry offers several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Uk,
    Us,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Uk => "uk",
            Accent::Us => "us",
        }
    }

    /// Path fragment that marks a clip of this accent in an audio `src`.
    pub fn path_marker(self) -> &'static str {
        match self {
            Accent::Uk => "/uk_pron/",
            Accent::Us => "/us_pron/",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown accent '{0}' (expected 'uk' or 'us')")]
pub struct AccentParseError(String);

impl FromStr for Accent {
    type Err = AccentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" => Ok(Accent::Uk),
            "us" => Ok(Accent::Us),
            _ => Err(AccentParseError(s.to_string())),
        }
    }
}
