//! Locating the pronunciation clip inside a dictionary entry page.
//!
//! Entry pages embed clips as `<source type="audio/mpeg" src="...">`; the accent
//! is only visible in the `src` path (`/uk_pron/` vs `/us_pron/`). When the
//! markup changes this returns `None` and the word is skipped.

use super::Accent;
use scraper::{Html, Selector};

const AUDIO_SOURCE_SELECTOR: &str = r#"source[type="audio/mpeg"][src]"#;

/// Returns the `src` of the first MPEG audio source for `accent`, as written in the page.
pub fn find_audio_src(html: &str, accent: Accent) -> Option<String> {
    let selector = Selector::parse(AUDIO_SOURCE_SELECTOR).ok()?;
    let document = Html::parse_document(html);
    let marker = accent.path_marker();
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .find(|src| src.contains(marker))
        .map(str::to_string)
}
