//! Display functions for command results

use super::formatters::{entropy_bar, feedback_to_emoji};
use crate::commands::{InitResult, Outcome, SolveResult};
use colored::Colorize;

/// Print the result of a solved game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nStep {}: {} {} {}",
            step.step,
            step.guess.to_uppercase().bright_white().bold(),
            step.feedback,
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            let narrowing = &step.narrowing;
            println!(
                "  Entropy:    [{}] {:.3} bits",
                entropy_bar(step.entropy, narrowing.answers_before, 20).green(),
                step.entropy
            );
            println!(
                "  Answers:    {} → {}",
                narrowing.answers_before, narrowing.answers_after
            );
            println!(
                "  Guesses:    {} → {}",
                narrowing.guesses_before, narrowing.guesses_after
            );
        }
    }

    println!();
    match &result.outcome {
        Outcome::Guessed { .. } => {
            println!("{}", "Answer found in last step.".green().bold());
        }
        Outcome::Deduced { word, step } => {
            println!(
                "{}",
                format!("Step {step}: Answer is {word}").green().bold()
            );
        }
    }
}

/// Print the optimal starting word
pub fn print_init_result(result: &InitResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "Best starting word is:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(result.entropy, result.answers, 30).green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Scored:      {} guesses against {} answers",
        result.guesses, result.answers
    );
    println!("   Time taken:  {:.2}s", result.duration.as_secs_f64());
}
