//! Feedback evaluation and its textual encoding
//!
//! A [`Feedback`] is one [`Mark`] per letter of the guess. The compact text
//! form uses one symbol per position:
//! - `x` = correct letter, correct position
//! - `?` = letter occurs in the secret, wrong position
//! - `.` = letter not present

use super::Word;
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter matches the secret at this position
    Correct,
    /// Letter occurs elsewhere in the secret
    WrongPosition,
    /// Letter does not occur in the secret
    NotPresent,
}

impl Mark {
    /// The symbol used in the text encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'x',
            Self::WrongPosition => '?',
            Self::NotPresent => '.',
        }
    }

    /// Inverse of [`Mark::symbol`]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Self::Correct),
            '?' => Some(Self::WrongPosition),
            '.' => Some(Self::NotPresent),
            _ => None,
        }
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All-correct feedback of the given length
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        Self(vec![Mark::Correct; len])
    }

    /// Compute the feedback when `guess` is played against `secret`
    ///
    /// A letter that is not at its matching position is `WrongPosition` if it
    /// occurs anywhere in the secret. Occurrences are not consumed: a letter
    /// present once in the secret but twice in the guess is `WrongPosition`
    /// at both non-matching positions. This differs from the official game's
    /// duplicate-letter rule and must stay that way, since pruning relies on
    /// the same reading.
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_infogain::core::{Feedback, Word};
    ///
    /// let guess = Word::new("ebfgh").unwrap();
    /// let secret = Word::new("abcde").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret).unwrap();
    /// assert_eq!(feedback.encode(), "?x...");
    /// ```
    pub fn evaluate(guess: &Word, secret: &Word) -> Result<Self> {
        if guess.len() != secret.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                found: secret.len(),
            });
        }

        let marks = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .map(|(&g, &s)| {
                if g == s {
                    Mark::Correct
                } else if secret.has_letter(g) {
                    Mark::WrongPosition
                } else {
                    Mark::NotPresent
                }
            })
            .collect();

        Ok(Self(marks))
    }

    /// Encode as text, e.g. `"x?..x"`
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }

    /// Decode text produced by [`Feedback::encode`] or typed by a user
    ///
    /// No trimming is done; callers strip line endings first.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedbackSymbol` for the first character
    /// outside `x`, `?` and `.`.
    pub fn decode(text: &str) -> Result<Self> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Mark::from_symbol(symbol)
                    .ok_or(SolverError::InvalidFeedbackSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Correct, NotPresent, WrongPosition};

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn full_match_is_all_correct() {
        for text in ["tests", "car", "aaaaa", "z"] {
            let word = w(text);
            let feedback = Feedback::evaluate(&word, &word).unwrap();
            assert!(feedback.is_all_correct());
            assert_eq!(feedback, Feedback::all_correct(text.len()));
        }
    }

    #[test]
    fn wrong_position_and_not_present() {
        let feedback = Feedback::evaluate(&w("ebfgh"), &w("abcde")).unwrap();
        assert_eq!(
            feedback.marks(),
            &[WrongPosition, Correct, NotPresent, NotPresent, NotPresent]
        );
    }

    #[test]
    fn repeated_letters_are_not_consumed() {
        // One 'e' in the secret still marks both misplaced 'e's
        let feedback = Feedback::evaluate(&w("eerie"), &w("crate")).unwrap();
        assert_eq!(
            feedback.marks(),
            &[WrongPosition, WrongPosition, WrongPosition, NotPresent, Correct]
        );
    }

    #[test]
    fn unequal_lengths_fail() {
        assert_eq!(
            Feedback::evaluate(&w("abc"), &w("ab")),
            Err(SolverError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(Feedback::evaluate(&w("ab"), &w("abc")).is_err());
    }

    #[test]
    fn encode_uses_compact_symbols() {
        let feedback = Feedback::new(vec![Correct, WrongPosition, NotPresent]);
        assert_eq!(feedback.encode(), "x?.");
        assert_eq!(feedback.to_string(), "x?.");
    }

    #[test]
    fn decode_inverts_encode() {
        let samples = [
            vec![],
            vec![Correct],
            vec![NotPresent, NotPresent, WrongPosition],
            vec![Correct, WrongPosition, NotPresent, Correct, WrongPosition],
        ];
        for marks in samples {
            let feedback = Feedback::new(marks);
            assert_eq!(Feedback::decode(&feedback.encode()).unwrap(), feedback);
        }
    }

    #[test]
    fn decode_rejects_unknown_symbols() {
        assert_eq!(
            Feedback::decode("x?g.."),
            Err(SolverError::InvalidFeedbackSymbol {
                symbol: 'g',
                position: 2
            })
        );
        assert!(Feedback::decode("xxxx ").is_err());
        assert!("XXXXX".parse::<Feedback>().is_err());
    }

    #[test]
    fn from_str_matches_decode() {
        let parsed: Feedback = "x.?".parse().unwrap();
        assert_eq!(parsed, Feedback::decode("x.?").unwrap());
    }
}
