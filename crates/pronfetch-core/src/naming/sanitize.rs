//! Word → filesystem-safe base name.

use std::fmt;

/// Base name of an output file. Never empty; only `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedName(String);

impl SanitizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sanitizes a word for use as a file base name.
///
/// - Reads `_` as a space, so a sanitized name maps back onto itself
/// - Keeps ASCII letters and digits, spaces, and hyphens; drops everything
///   else (non-ASCII letters included, so the result does not depend on locale)
/// - Trims leading/trailing whitespace
/// - Replaces the remaining spaces with `_`
///
/// Returns `None` when nothing survives; such a word is skipped.
pub fn sanitize_word(word: &str) -> Option<SanitizedName> {
    let kept: String = word
        .chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, ' ' | '-'))
        .collect();
    let trimmed = kept.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(SanitizedName(trimmed.replace(' ', "_")))
}
