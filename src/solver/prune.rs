//! Dictionary pruning from observed feedback
//!
//! A `(guess, feedback)` pair is turned into [`Constraints`]; a word survives
//! pruning iff the constraints admit it.

use crate::core::{Feedback, Mark, Word};
use crate::error::{Result, SolverError};
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter constraints derived from one round of feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Letters marked `NotPresent` anywhere in the guess
    excluded: FxHashSet<u8>,
    /// (position, letter) pairs marked `Correct`
    fixed: Vec<(usize, u8)>,
    /// Letters marked `WrongPosition`, with the positions they may not occupy
    misplaced: FxHashMap<u8, Vec<usize>>,
}

impl Constraints {
    /// Derive the constraints implied by `feedback` for `guess`
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the feedback does not have
    /// one mark per guess letter.
    pub fn derive(guess: &Word, feedback: &Feedback) -> Result<Self> {
        if feedback.len() != guess.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                found: feedback.len(),
            });
        }

        let mut constraints = Self::default();
        for (position, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate()
        {
            match mark {
                Mark::NotPresent => {
                    constraints.excluded.insert(letter);
                }
                Mark::Correct => constraints.fixed.push((position, letter)),
                Mark::WrongPosition => constraints
                    .misplaced
                    .entry(letter)
                    .or_default()
                    .push(position),
            }
        }

        Ok(constraints)
    }

    /// Check a word against all three rules
    ///
    /// A word shorter than a constrained position is never admitted.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let reaches = |position: usize| position < word.len();
        let in_range = self.fixed.iter().all(|&(position, _)| reaches(position))
            && self
                .misplaced
                .values()
                .flatten()
                .all(|&position| reaches(position));
        if !in_range {
            return false;
        }

        let fixed_ok = self
            .fixed
            .iter()
            .all(|&(position, letter)| word.char_at(position) == letter);
        if !fixed_ok {
            return false;
        }

        if self.excluded.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }

        self.misplaced.iter().all(|(&letter, forbidden)| {
            word.has_letter(letter)
                && forbidden
                    .iter()
                    .all(|&position| word.char_at(position) != letter)
        })
    }
}

/// Keep only the words consistent with `feedback` for `guess`
///
/// Input order is preserved and the input is left untouched.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the feedback length or any
/// word's length differs from the guess.
///
/// # Examples
/// ```
/// use wordle_infogain::core::{Feedback, Word};
/// use wordle_infogain::solver::prune;
///
/// let words: Vec<Word> = ["abc", "bcd", "cde"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let guess = Word::new("abc").unwrap();
/// let feedback = Feedback::decode(".??").unwrap();
///
/// let kept = prune(&words, &guess, &feedback).unwrap();
/// assert_eq!(kept, vec![Word::new("bcd").unwrap()]);
/// ```
pub fn prune(words: &[Word], guess: &Word, feedback: &Feedback) -> Result<Vec<Word>> {
    let constraints = Constraints::derive(guess, feedback)?;

    let mut kept = Vec::new();
    for word in words {
        if word.len() != guess.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                found: word.len(),
            });
        }
        if constraints.admits(word) {
            kept.push(word.clone());
        }
    }

    Ok(kept)
}
