//! Command implementations

pub mod init;
pub mod interactive;
pub mod solve;

pub use init::{InitResult, find_start_word};
pub use interactive::run_interactive;
pub use solve::{Outcome, SolveConfig, SolveResult, SolveStep, play, solve_for};
