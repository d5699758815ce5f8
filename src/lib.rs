//! Wordle Solver
//!
//! Picks each guess by expected information gain and prunes the dictionary
//! with the feedback it gets back.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_infogain::core::{Feedback, Word};
//! use wordle_infogain::solver::{prune, select_best};
//!
//! fn words(texts: &[&str]) -> Vec<Word> {
//!     texts.iter().map(|t| Word::new(*t).unwrap()).collect()
//! }
//!
//! let guesses = words(&["car", "far", "cfw"]);
//! let answers = words(&["car", "far", "war", "tar"]);
//!
//! let (best, bits) = select_best(&guesses, &answers).unwrap();
//! assert_eq!(best.text(), "cfw");
//! assert!((bits - 2.0).abs() < 1e-9);
//!
//! let feedback = Feedback::evaluate(best, &Word::new("war").unwrap()).unwrap();
//! assert_eq!(feedback.encode(), "..?");
//!
//! let remaining = prune(&answers, best, &feedback).unwrap();
//! assert_eq!(remaining, words(&["war"]));
//! ```

// Core domain types
pub mod core;

// Error type shared by the core
pub mod error;

// Scoring, selection and pruning
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
