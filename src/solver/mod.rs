//! Guess selection and dictionary pruning
//!
//! The entropy scorer and selector pick the next guess; the pruner narrows
//! the pools once feedback is known. [`Session`] drives both across rounds.

mod config;
pub mod entropy;
mod prune;
mod session;

pub use config::SolverConfig;
pub use entropy::{score, select_best};
pub use prune::{Constraints, prune};
pub use session::{Narrowing, Session};
