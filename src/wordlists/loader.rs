//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::WordSourceError;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped. Every other line must
/// be a valid 5-letter word.
///
/// # Errors
///
/// Returns `WordSourceError::Unreachable` if the file cannot be read and
/// `WordSourceError::Malformed` on the first invalid entry.
///
/// # Examples
/// ```no_run
/// use wordgrid::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordSourceError> {
    let content = fs::read_to_string(path)?;
    parse_word_list(&content)
}

/// Parse a newline-separated word list
///
/// # Errors
///
/// Returns `WordSourceError::Malformed` on the first invalid entry.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, WordSourceError> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            Word::new(line).map_err(|reason| WordSourceError::Malformed {
                entry: line.to_string(),
                reason,
            })
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordgrid::wordlists::loader::words_from_slice;
/// use wordgrid::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let words = parse_word_list("# header\n\ncrane\n  slate  \n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_rejects_malformed_entry() {
        let err = parse_word_list("crane\ncr4ne\n").unwrap_err();
        assert!(matches!(err, WordSourceError::Malformed { ref entry, .. } if entry == "cr4ne"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "speed\nerase").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "SPEED");
    }

    #[test]
    fn load_from_missing_file_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, WordSourceError::Unreachable(_)));
    }
}
