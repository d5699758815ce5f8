//! Error types for the solver core
//!
//! Every fallible core operation returns [`Result`]. The core validates its
//! inputs and fails fast; recovery (re-prompting, aborting) is left to the
//! caller.

use thiserror::Error;

/// Errors produced by the solver core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two sequences that must share a length do not
    #[error("length mismatch: expected {expected} letters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// No candidate guesses were supplied to the selector
    #[error("no candidate guesses remain")]
    EmptyGuessList,

    /// Feedback text contained a character outside `x`, `?` and `.`
    #[error("invalid feedback symbol {symbol:?} at position {position} (use 'x', '?' or '.')")]
    InvalidFeedbackSymbol { symbol: char, position: usize },

    /// A word could not be constructed from the given text
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// A dictionary contains words of more than one length
    #[error("word {word:?} has {found} letters, but the dictionary uses {expected}")]
    MixedWordLengths {
        expected: usize,
        found: usize,
        word: String,
    },

    /// The answer pool emptied: no word is consistent with the feedback
    #[error("no solution: no answer is consistent with the feedback")]
    NoSolution,

    /// The secret to solve for is not one of the possible answers
    #[error("secret {0:?} is not in the answer list")]
    SecretNotInAnswers(String),

    /// The requested start word is not a legal guess
    #[error("start word {0:?} is not in the guess list")]
    StartWordNotInDictionary(String),

    /// The worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = SolverError::LengthMismatch {
            expected: 5,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: expected 5 letters, found 4"
        );

        let err = SolverError::InvalidFeedbackSymbol {
            symbol: 'g',
            position: 2,
        };
        assert!(err.to_string().contains("'g'"));
        assert!(err.to_string().contains("position 2"));
    }
}
