//! Shannon entropy calculation for feedback distributions
//!
//! Given a guess and the answer pool, computes the expected information gain.

use crate::core::{Feedback, Word};
use crate::error::Result;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Group answers by the feedback they produce against `guess`
///
/// The returned map only has entries for patterns that occur.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any answer differs in length
/// from the guess.
pub fn outcome_map(guess: &Word, answers: &[Word]) -> Result<FxHashMap<Feedback, usize>> {
    let mut counts = FxHashMap::default();

    for answer in answers {
        let feedback = Feedback::evaluate(guess, answer)?;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Calculate Shannon entropy from an outcome distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Zero-count buckets contribute nothing
/// - Returns 0.0 for an empty distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_infogain::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert("a", 25);
/// uniform.insert("b", 25);
/// uniform.insert("c", 25);
/// uniform.insert("d", 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<K, S>(outcome_counts: &HashMap<K, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = outcome_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    outcome_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Score a guess: the entropy of its outcome distribution over `answers`
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any answer differs in length
/// from the guess.
///
/// # Examples
/// ```
/// use wordle_infogain::core::Word;
/// use wordle_infogain::solver::entropy::score;
///
/// let guess = Word::new("bbbbb").unwrap();
/// let answers = vec![Word::new("bbbbb").unwrap(), Word::new("ccccc").unwrap()];
///
/// let entropy = score(&guess, &answers).unwrap();
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
pub fn score(guess: &Word, answers: &[Word]) -> Result<f64> {
    if answers.is_empty() {
        return Ok(0.0);
    }

    Ok(shannon_entropy(&outcome_map(guess, answers)?))
}
