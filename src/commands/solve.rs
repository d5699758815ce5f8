//! Solving loop
//!
//! Runs guess → feedback → prune → select rounds until one answer remains or
//! a guess comes back all-correct. The feedback source is pluggable: the
//! solve-for mode computes it from a known secret, the interactive mode asks
//! the user.

use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::{Narrowing, Session, score};
use anyhow::Result;
use log::info;

/// Configuration for solving a known secret
pub struct SolveConfig {
    pub secret: String,
    /// Opening guess; when absent the selector computes one
    pub start: Option<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            start: None,
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: Option<String>) -> Self {
        self.start = start;
        self
    }
}

/// One round of the game
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub step: usize,
    pub guess: String,
    /// Entropy of the guess against the answers it was chosen for
    pub entropy: f64,
    pub feedback: Feedback,
    pub narrowing: Narrowing,
}

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The last guess came back all-correct
    Guessed { word: String, step: usize },
    /// Only one answer was left; it would be guessed at `step`
    Deduced { word: String, step: usize },
}

impl Outcome {
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Guessed { word, .. } | Self::Deduced { word, .. } => word,
        }
    }
}

/// Full record of a solved game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub steps: Vec<SolveStep>,
    pub outcome: Outcome,
}

/// Pick the first guess: the configured start word, or the best one
///
/// # Errors
///
/// Returns an error if the start word is not a legal guess or no guesses
/// exist.
pub fn opening_guess(session: &Session, start: Option<&str>) -> Result<(Word, f64)> {
    match start {
        Some(text) => {
            let word = session.find_guess(text)?;
            let entropy = score(&word, session.answers())?;
            Ok((word, entropy))
        }
        None => Ok(session.best_guess()?),
    }
}

/// Play rounds until the answer is known
///
/// `feedback_for` receives the step number, the guess and its entropy, and
/// returns the feedback observed for that guess.
///
/// # Errors
///
/// - `SolverError::NoSolution` if the feedback eliminates every answer
/// - any error from `feedback_for` or from the core operations
pub fn play<F>(
    session: &mut Session,
    opening: (Word, f64),
    mut feedback_for: F,
) -> Result<SolveResult>
where
    F: FnMut(usize, &Word, f64) -> Result<Feedback>,
{
    let (mut guess, mut entropy) = opening;
    let mut step = 1;
    let mut steps = Vec::new();

    while !session.is_resolved() {
        info!("Step {step}:\tGuessing: {guess} ({entropy:.3})");

        let feedback = feedback_for(step, &guess, entropy)?;
        let narrowing = session.apply(&guess, &feedback)?;
        let solved = feedback.is_all_correct();

        steps.push(SolveStep {
            step,
            guess: guess.text().to_string(),
            entropy,
            feedback,
            narrowing,
        });

        if solved {
            return Ok(SolveResult {
                steps,
                outcome: Outcome::Guessed {
                    word: guess.text().to_string(),
                    step,
                },
            });
        }

        if session.answers().is_empty() {
            return Err(SolverError::NoSolution.into());
        }

        (guess, entropy) = session.best_guess()?;
        step += 1;
    }

    let word = session
        .solution()
        .ok_or(SolverError::NoSolution)?
        .text()
        .to_string();

    Ok(SolveResult {
        steps,
        outcome: Outcome::Deduced { word, step },
    })
}

/// Solve for a known secret
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid word or has the wrong length
/// - The secret is not in the answer pool
/// - The start word is not a legal guess
/// - The feedback leaves no answers
pub fn solve_for(config: &SolveConfig, session: &mut Session) -> Result<SolveResult> {
    let secret = Word::new(config.secret.as_str())?;
    if secret.len() != session.word_len() {
        return Err(SolverError::LengthMismatch {
            expected: session.word_len(),
            found: secret.len(),
        }
        .into());
    }
    if !session.answers().contains(&secret) {
        return Err(SolverError::SecretNotInAnswers(secret.text().to_string()).into());
    }

    let opening = opening_guess(session, config.start.as_deref())?;
    play(session, opening, |_, guess, _| {
        Ok(Feedback::evaluate(guess, &secret)?)
    })
}
