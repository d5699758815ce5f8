//! Interactive mode
//!
//! Suggests a guess each round and reads the feedback from the user. Reader
//! and writer are generic so the loop can be driven from tests.

use super::solve::{SolveResult, opening_guess, play};
use crate::core::{Feedback, Word};
use crate::error::SolverError;
use crate::solver::Session;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the interactive solver
///
/// Malformed feedback (unknown symbols or the wrong length) is reported and
/// the user is asked again. Typing `quit` or closing the input ends the game
/// with an error.
///
/// # Errors
///
/// Returns an error if reading or writing fails, the user quits, the start
/// word is not a legal guess, or the feedback leaves no answers.
pub fn run_interactive<R, W>(
    session: &mut Session,
    start: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<SolveResult>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Enter feedback as one symbol per letter: 'x' correct, '?' wrong position, '.' not present."
    )?;

    let word_len = session.word_len();
    let opening = opening_guess(session, start)?;

    play(session, opening, |step, guess, entropy| {
        writeln!(
            output,
            "Step {step}: guess {} ({entropy:.3} bits)",
            guess.text().to_uppercase().bright_yellow().bold()
        )?;
        read_feedback(input, output, guess, word_len)
    })
}

/// Prompt until the user enters well-formed feedback for `guess`
fn read_feedback<R, W>(
    input: &mut R,
    output: &mut W,
    guess: &Word,
    word_len: usize,
) -> Result<Feedback>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Enter the feedback: ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read feedback")?;
        if read == 0 {
            bail!("input closed before {guess} was scored");
        }

        let text = line.trim();
        if matches!(text, "quit" | "q") {
            bail!("game abandoned");
        }

        match Feedback::decode(text) {
            Ok(feedback) if feedback.len() == word_len => return Ok(feedback),
            Ok(feedback) => {
                let err = SolverError::LengthMismatch {
                    expected: word_len,
                    found: feedback.len(),
                };
                writeln!(output, "{}", err.to_string().red())?;
            }
            Err(err) => writeln!(output, "{}", err.to_string().red())?,
        }
    }
}
