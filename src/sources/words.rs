//! Target word sources

use crate::core::Word;
use crate::error::WordSourceError;
use crate::wordlists::{ANSWERS, loader};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::debug;

/// Supplies one target word per session
pub trait WordSource {
    /// Produce the next target word
    ///
    /// # Errors
    /// Returns `WordSourceError` when the source cannot be reached or yields
    /// something that is not a 5-letter word.
    fn fetch_target_word(&mut self) -> Result<Word, WordSourceError>;
}

/// Pick uniformly from a list of words
fn pick(words: &[Word], rng: &mut StdRng) -> Result<Word, WordSourceError> {
    words.choose(rng).copied().ok_or(WordSourceError::Empty)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Random word from the list compiled into the binary
pub struct EmbeddedWords {
    words: Vec<Word>,
    rng: StdRng,
}

impl EmbeddedWords {
    /// Create a source; a `seed` makes the sequence of words reproducible
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            words: loader::words_from_slice(ANSWERS),
            rng: make_rng(seed),
        }
    }
}

impl WordSource for EmbeddedWords {
    fn fetch_target_word(&mut self) -> Result<Word, WordSourceError> {
        pick(&self.words, &mut self.rng)
    }
}

/// Random word from a plain-text word list
///
/// The file is re-read on every fetch, so edits take effect on the next
/// session and a file that disappears surfaces as `Unreachable`.
pub struct FileWords {
    path: PathBuf,
    rng: StdRng,
}

impl FileWords {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            path: path.into(),
            rng: make_rng(seed),
        }
    }
}

impl WordSource for FileWords {
    fn fetch_target_word(&mut self) -> Result<Word, WordSourceError> {
        let words = loader::load_from_file(&self.path)?;
        debug!(path = %self.path.display(), count = words.len(), "loaded word list");
        pick(&words, &mut self.rng)
    }
}

/// Always yields the same word
#[derive(Debug, Clone, Copy)]
pub struct FixedWord(Word);

impl FixedWord {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl WordSource for FixedWord {
    fn fetch_target_word(&mut self) -> Result<Word, WordSourceError> {
        Ok(self.0)
    }
}
