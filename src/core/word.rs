//! Word representation
//!
//! A Word stores a lowercase word of any length along with the set of its
//! letters, so "does this letter occur" is a single lookup.

use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dictionary word with letter membership tracking
///
/// Equality and hashing only consider the text.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. The length is not fixed here; a run's single
    /// word length is enforced where dictionaries are assembled.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the text is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::Word;
    ///
    /// let word = Word::new("Soare").unwrap();
    /// assert_eq!(word.text(), "soare");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(SolverError::InvalidWord {
                word: text,
                reason: "word is empty",
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidWord {
                word: text,
                reason: "word must contain only ASCII letters",
            });
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
