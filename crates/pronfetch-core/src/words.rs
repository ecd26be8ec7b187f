//! Word list loading from comma-separated files.
//!
//! Every field of every record is a candidate word; rows and columns carry no
//! meaning. Fields are trimmed and empty ones dropped, file order preserved.

use crate::error::SourceError;
use std::io;
use std::path::Path;

/// Loads all non-empty trimmed fields of `path`, flattened in file order.
///
/// An empty result is not an error here; the caller decides what to report.
pub fn load_words(path: &Path) -> Result<Vec<String>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| classify_open_error(path, e))?;
    let words = read_words(reader).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = words.len(), "loaded words");
    Ok(words)
}

/// Same as [`load_words`] over any reader (stdin, in-memory data).
pub fn read_words<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<String>, csv::Error> {
    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        words.extend(
            record
                .iter()
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string),
        );
    }
    Ok(words)
}

fn classify_open_error(path: &Path, e: csv::Error) -> SourceError {
    let not_found = matches!(e.kind(), csv::ErrorKind::Io(err) if err.kind() == io::ErrorKind::NotFound);
    if not_found {
        SourceError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        SourceError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn from_str(data: &str) -> Vec<String> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_bytes());
        read_words(reader).unwrap()
    }

    #[test]
    fn flattens_rows_and_drops_blank_fields() {
        let words = from_str("hello,world\n,  \ntest-word\n");
        assert_eq!(words, vec!["hello", "world", "test-word"]);
    }

    #[test]
    fn trims_fields_and_keeps_duplicates() {
        let words = from_str("  apple , banana\napple\n");
        assert_eq!(words, vec!["apple", "banana", "apple"]);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let words = from_str("\"well, actually\",next\n");
        assert_eq!(words, vec!["well, actually", "next"]);
    }

    #[test]
    fn ragged_rows() {
        let words = from_str("a\nb,c,d\n\ne,f\n");
        assert_eq!(words, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn blank_file_has_no_words() {
        assert!(from_str("").is_empty());
        assert!(from_str(" , ,\n\n  \n").is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_words(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"ok,\xff\xfe\n").unwrap();
        drop(f);
        let err = load_words(&path).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn loads_from_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.csv");
        std::fs::write(&path, "hello,world\n,  \ntest-word\n").unwrap();
        let words = load_words(&path).unwrap();
        assert_eq!(words, vec!["hello", "world", "test-word"]);
    }
}
