//! Round-by-round solving state

use super::config::SolverConfig;
use super::entropy::select_best;
use super::prune::prune;
use crate::core::{Feedback, Word};
use crate::error::{Result, SolverError};
use crate::wordlists::Dictionary;
use log::info;
use rayon::ThreadPool;

/// Pool sizes before and after one round of pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrowing {
    pub guesses_before: usize,
    pub guesses_after: usize,
    pub answers_before: usize,
    pub answers_after: usize,
}

/// Guess pool and answer pool for one game
///
/// Both pools only ever shrink, and the answer pool stays a subset of the
/// guess pool.
pub struct Session {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    word_len: usize,
    pool: ThreadPool,
}

impl Session {
    /// Start a session from a dictionary
    ///
    /// # Errors
    /// Returns `SolverError::ThreadPool` if the worker pool cannot be built.
    pub fn new(dictionary: Dictionary, config: &SolverConfig) -> Result<Self> {
        let word_len = dictionary.word_len();
        let (guesses, answers) = dictionary.into_pools();

        Ok(Self {
            guesses,
            answers,
            word_len,
            pool: config.build_pool()?,
        })
    }

    /// Remaining legal guesses
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Remaining possible answers
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// True once at most one answer remains
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.answers.len() <= 1
    }

    /// The answer, when exactly one remains
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.answers.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Look up a word in the guess pool
    ///
    /// # Errors
    /// Returns `SolverError::StartWordNotInDictionary` if it is not a legal
    /// guess.
    pub fn find_guess(&self, text: &str) -> Result<Word> {
        let word = Word::new(text)?;
        if self.guesses.contains(&word) {
            Ok(word)
        } else {
            Err(SolverError::StartWordNotInDictionary(word.text().to_string()))
        }
    }

    /// Pick the guess with the greatest entropy over the current answers
    ///
    /// # Errors
    /// Returns `SolverError::EmptyGuessList` if no guesses remain.
    pub fn best_guess(&self) -> Result<(Word, f64)> {
        let (best, entropy) = self
            .pool
            .install(|| select_best(&self.guesses, &self.answers))?;
        Ok((best.clone(), entropy))
    }

    /// Prune both pools with the feedback observed for `guess`
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the guess or feedback length
    /// differs from the dictionary's word length.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<Narrowing> {
        if guess.len() != self.word_len {
            return Err(SolverError::LengthMismatch {
                expected: self.word_len,
                found: guess.len(),
            });
        }

        let guesses = prune(&self.guesses, guess, feedback)?;
        let answers = prune(&self.answers, guess, feedback)?;

        let narrowing = Narrowing {
            guesses_before: self.guesses.len(),
            guesses_after: guesses.len(),
            answers_before: self.answers.len(),
            answers_after: answers.len(),
        };
        info!(
            "Guesses: {} ({}), Answers: {} ({}), Feedback: {feedback}",
            narrowing.guesses_after,
            narrowing.guesses_before,
            narrowing.answers_after,
            narrowing.answers_before,
        );

        self.guesses = guesses;
        self.answers = answers;
        Ok(narrowing)
    }
}
