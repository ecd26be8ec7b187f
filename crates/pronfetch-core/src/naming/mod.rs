//! Deriving names from words: output file names and dictionary URL slugs.

mod sanitize;
mod slug;

pub use sanitize::{sanitize_word, SanitizedName};
pub use slug::url_slug;

/// Extension of every output file.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Output file name for a word: `<name>.mp3`, or `<name>_<suffix>.mp3` when the
/// provider tags its output (the scrape path tags with the accent).
///
/// # Examples
///
/// - `output_file_name(&hello, None)` → `"hello.mp3"`
/// - `output_file_name(&ice_cream, Some("uk"))` → `"ice_cream_uk.mp3"`
pub fn output_file_name(name: &SanitizedName, suffix: Option<&str>) -> String {
    match suffix {
        Some(s) => format!("{}_{}.{}", name, s, AUDIO_EXTENSION),
        None => format!("{}.{}", name, AUDIO_EXTENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_without_suffix() {
        let name = sanitize_word("hello").unwrap();
        assert_eq!(output_file_name(&name, None), "hello.mp3");
    }

    #[test]
    fn file_name_with_accent_suffix() {
        let name = sanitize_word("ice cream").unwrap();
        assert_eq!(output_file_name(&name, Some("uk")), "ice_cream_uk.mp3");
        assert_eq!(output_file_name(&name, Some("us")), "ice_cream_us.mp3");
    }

    #[test]
    fn colliding_words_share_a_file() {
        let a = sanitize_word("co-op").unwrap();
        let b = sanitize_word("co-op!").unwrap();
        assert_eq!(output_file_name(&a, None), output_file_name(&b, None));
    }
}
