//! Starting word search
//!
//! Scores every legal guess against the full answer pool. This is the most
//! expensive selection of a game, so a spinner runs while it works.

use crate::solver::Session;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};

/// The best opening guess for a dictionary
pub struct InitResult {
    pub word: String,
    pub entropy: f64,
    pub guesses: usize,
    pub answers: usize,
    pub duration: Duration,
}

/// Find the optimal starting word
///
/// # Errors
///
/// Returns an error if the guess pool is empty.
pub fn find_start_word(session: &Session, show_progress: bool) -> Result<InitResult> {
    info!("Calculating the optimal starting word.");

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")?,
        );
        pb.set_message(format!(
            "Scoring {} guesses against {} answers",
            session.guesses().len(),
            session.answers().len()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let result = session.best_guess();
    spinner.finish_and_clear();
    let (word, entropy) = result?;

    Ok(InitResult {
        word: word.text().to_string(),
        entropy,
        guesses: session.guesses().len(),
        answers: session.answers().len(),
        duration: start.elapsed(),
    })
}
