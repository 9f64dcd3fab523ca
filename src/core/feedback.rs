//! Guess evaluation and per-letter feedback
//!
//! Each letter of a guess is classified against the target:
//! - `Correct`: right letter, right position
//! - `Misplaced`: letter occurs elsewhere in the target and is not yet consumed
//! - `Wrong`: letter absent, or every occurrence already consumed
//!
//! `Unset` marks a grid cell that has not been scored yet.

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Unset,
    Correct,
    Misplaced,
    Wrong,
}

impl Tag {
    /// Emoji square used for this tag
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
            Self::Unset => '⬛',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Wrong => "wrong",
        };
        f.write_str(name)
    }
}

/// Evaluate a guess against a target, letter by letter
///
/// Works on any two equal-length letter sequences.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and remove them from the pool
/// 2. Second pass: every other position takes a remaining occurrence of its
///    letter from the pool (`Misplaced`), or is `Wrong` when none is left
///
/// # Panics
/// Panics if `guess` and `target` differ in length. Callers must never mix
/// lengths.
#[must_use]
pub fn evaluate_letters(guess: &[u8], target: &[u8]) -> Vec<Tag> {
    assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have the same length"
    );

    let mut result = vec![Tag::Wrong; guess.len()];
    let mut available: FxHashMap<u8, usize> = FxHashMap::default();

    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = Tag::Correct;
        } else {
            *available.entry(t).or_insert(0) += 1;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if result[i] == Tag::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Tag::Misplaced;
            *count -= 1;
        }
    }

    result
}

/// Evaluate a 5-letter guess against a 5-letter target
///
/// # Examples
/// ```
/// use wordgrid::core::{Tag, Word, evaluate};
///
/// let guess = Word::new("trace").unwrap();
/// let target = Word::new("crane").unwrap();
/// let feedback = evaluate(&guess, &target);
///
/// assert_eq!(feedback.tags()[0], Tag::Wrong);
/// assert_eq!(feedback.tags()[3], Tag::Misplaced);
/// assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let tags = evaluate_letters(guess.letters(), target.letters());
    let mut out = [Tag::Wrong; WORD_LEN];
    out.copy_from_slice(&tags);
    Feedback(out)
}

/// Scored feedback for one full row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tag; WORD_LEN]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Tag::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Tag; WORD_LEN] {
        &self.0
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&t| t == Tag::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}
