//! Entropy-based guess scoring and selection
//!
//! Implements Shannon entropy over feedback distributions. This is the
//! foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{outcome_map, score, shannon_entropy};
pub use selector::select_best;
