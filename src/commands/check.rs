//! One-shot guess evaluation
//!
//! Scores a single guess against a given target without starting a session.

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either word is not exactly 5 ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(CheckResult {
        feedback: evaluate(&guess, &target),
        guess,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;

    #[test]
    fn check_valid_words() {
        let result = check_guess("erase", "speed").unwrap();
        assert_eq!(result.guess.text(), "ERASE");
        assert_eq!(result.target.text(), "SPEED");
        assert_eq!(result.feedback.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn check_perfect() {
        let result = check_guess("Crane", "CRANE").unwrap();
        assert!(result.feedback.is_perfect());
        assert!(result.feedback.tags().iter().all(|&t| t == Tag::Correct));
    }

    #[test]
    fn check_invalid_word() {
        assert_eq!(
            check_guess("cran", "crane"),
            Err(WordError::InvalidLength(4))
        );
        assert!(check_guess("crane", "cr@ne").is_err());
    }
}
