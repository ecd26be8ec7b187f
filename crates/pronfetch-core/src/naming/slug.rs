//! Word → dictionary URL slug.

/// Lower-cases, turns spaces into hyphens, then drops anything outside `[a-z0-9-]`.
/// An empty result means the word cannot address an entry page.
pub fn url_slug(word: &str) -> String {
    word.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
