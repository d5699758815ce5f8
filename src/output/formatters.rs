//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Format feedback as coloured squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::WrongPosition => '🟨',
            Mark::NotPresent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar, relative to the most a guess could reveal
///
/// The ceiling is `log2(answers)`: every answer in its own bucket.
#[must_use]
pub fn entropy_bar(entropy: f64, answers: usize, width: usize) -> String {
    let max_entropy = (answers.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
