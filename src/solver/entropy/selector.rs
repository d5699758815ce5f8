//! Entropy-maximising guess selection
//!
//! Every guess is scored independently on the rayon pool; results are
//! reduced by original index so the first of several equal scores wins.

use super::calculator::score;
use crate::core::Word;
use crate::error::{Result, SolverError};
use log::debug;
use rayon::prelude::*;

/// Guesses between two progress lines in the debug log
const PROGRESS_INTERVAL: usize = 100;

/// Select the guess with the greatest entropy against `answers`
///
/// Ties go to the guess that comes first in `guesses`.
///
/// # Errors
/// - `SolverError::EmptyGuessList` if `guesses` is empty
/// - `SolverError::LengthMismatch` if a guess and an answer differ in length
///
/// # Examples
/// ```
/// use wordle_infogain::core::Word;
/// use wordle_infogain::solver::entropy::select_best;
///
/// let guesses: Vec<Word> = ["car", "far", "cfw"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let answers: Vec<Word> = ["car", "far", "war", "tar"].iter().map(|w| Word::new(*w).unwrap()).collect();
///
/// let (best, entropy) = select_best(&guesses, &answers).unwrap();
/// assert_eq!(best.text(), "cfw");
/// assert!((entropy - 2.0).abs() < 1e-9);
/// ```
pub fn select_best<'a>(guesses: &'a [Word], answers: &[Word]) -> Result<(&'a Word, f64)> {
    if guesses.is_empty() {
        return Err(SolverError::EmptyGuessList);
    }

    let scores = guesses
        .par_iter()
        .map(|guess| score(guess, answers))
        .collect::<Result<Vec<f64>>>()?;

    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (index, &entropy) in scores.iter().enumerate() {
        if index % PROGRESS_INTERVAL == 0 {
            debug!("{index}/{}", guesses.len());
        }
        if entropy > best_score {
            best_index = index;
            best_score = entropy;
            debug!(
                "Best guess updated: {} ({best_score:.3})",
                guesses[best_index]
            );
        }
    }

    Ok((&guesses[best_index], best_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn one_step_reveal() {
        let guesses = words(&["car", "far", "cfw"]);
        let answers = words(&["car", "far", "war", "tar"]);

        let (best, entropy) = select_best(&guesses, &answers).unwrap();

        assert_eq!(best.text(), "cfw");
        assert!((entropy - (-4.0 * 0.25 * 0.25_f64.log2())).abs() < 1e-9);
    }

    #[test]
    fn single_guess_returns_that_guess() {
        let guesses = words(&["crane"]);
        let answers = words(&["slate"]);

        let (best, _) = select_best(&guesses, &answers).unwrap();
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn ties_go_to_first_in_input_order() {
        // Neither guess shares a letter with the answers: both score 0
        let guesses = words(&["aaaaa", "bbbbb", "zzzzz"]);
        let answers = words(&["ccccc", "ddddd"]);

        for _ in 0..8 {
            let (best, entropy) = select_best(&guesses, &answers).unwrap();
            assert_eq!(best.text(), "aaaaa");
            assert!(entropy.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn equal_scores_keep_earlier_guess() {
        // All three split the pool 1/3
        let guesses = words(&["war", "car", "far"]);
        let answers = words(&["car", "far", "war", "tar"]);

        let (best, _) = select_best(&guesses, &answers).unwrap();
        assert_eq!(best.text(), "war");
    }

    #[test]
    fn long_guess_list_keeps_first_of_equals() {
        // 250 guesses, none sharing a letter with the answers
        let letters = b"bcdefghijklmnopqrstuvwxyz";
        let guesses: Vec<Word> = (0..250)
            .map(|i| {
                let text: String = [letters[i % 25], letters[(i / 25) % 25], b'b']
                    .iter()
                    .map(|&b| char::from(b))
                    .collect();
                Word::new(text).unwrap()
            })
            .collect();
        let answers = words(&["aaa"]);

        let (best, entropy) = select_best(&guesses, &answers).unwrap();
        assert_eq!(best, &guesses[0]);
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_guess_list_fails() {
        let answers = words(&["slate"]);
        assert_eq!(
            select_best(&[], &answers),
            Err(SolverError::EmptyGuessList)
        );
    }

    #[test]
    fn length_mismatch_propagates() {
        let guesses = words(&["car", "cars"]);
        let answers = words(&["tar"]);
        assert!(matches!(
            select_best(&guesses, &answers),
            Err(SolverError::LengthMismatch { .. })
        ));
    }
}
