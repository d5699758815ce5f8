//! Guess and answer pools for one run

use crate::core::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;

/// The guess pool and answer pool a run starts from
///
/// Invariants: every word has the same length, and every answer is also a
/// guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    word_len: usize,
}

impl Dictionary {
    /// Assemble a dictionary from separate guess and answer lists
    ///
    /// Answers missing from `guesses` are appended to the guess pool, and
    /// repeated guesses are dropped after their first occurrence.
    ///
    /// # Errors
    /// - `SolverError::EmptyGuessList` if both lists are empty
    /// - `SolverError::MixedWordLengths` if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::Word;
    /// use wordle_infogain::wordlists::Dictionary;
    ///
    /// let guesses = vec![Word::new("cfw").unwrap()];
    /// let answers = vec![Word::new("car").unwrap(), Word::new("far").unwrap()];
    ///
    /// let dictionary = Dictionary::from_lists(guesses, answers).unwrap();
    /// assert_eq!(dictionary.guesses().len(), 3);
    /// assert_eq!(dictionary.word_len(), 3);
    /// ```
    pub fn from_lists(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self> {
        let word_len = guesses
            .first()
            .or_else(|| answers.first())
            .map(Word::len)
            .ok_or(SolverError::EmptyGuessList)?;

        if let Some(odd) = guesses
            .iter()
            .chain(&answers)
            .find(|word| word.len() != word_len)
        {
            return Err(SolverError::MixedWordLengths {
                expected: word_len,
                found: odd.len(),
                word: odd.text().to_string(),
            });
        }

        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut pool = Vec::with_capacity(guesses.len() + answers.len());
        for word in guesses.into_iter().chain(answers.iter().cloned()) {
            if seen.insert(word.clone()) {
                pool.push(word);
            }
        }

        let mut answer_seen: FxHashSet<&str> = FxHashSet::default();
        let answers: Vec<Word> = answers
            .iter()
            .filter(|word| answer_seen.insert(word.text()))
            .cloned()
            .collect();

        Ok(Self {
            guesses: pool,
            answers,
            word_len,
        })
    }

    /// Use one list as both guess and answer pool
    ///
    /// # Errors
    /// Same as [`Dictionary::from_lists`].
    pub fn answers_only(answers: Vec<Word>) -> Result<Self> {
        Self::from_lists(Vec::new(), answers)
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// The single word length shared by every word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Split into `(guesses, answers)`
    #[must_use]
    pub fn into_pools(self) -> (Vec<Word>, Vec<Word>) {
        (self.guesses, self.answers)
    }
}
