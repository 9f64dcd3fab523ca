//! Core domain types for the word grid
//!
//! This module contains the fundamental domain types: the 5-letter [`Word`],
//! the per-letter [`Tag`] and the [`evaluate`] function that scores a guess.
//! Everything here is pure and has no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, Tag, evaluate, evaluate_letters};
pub use word::{WORD_LEN, Word, WordError};
