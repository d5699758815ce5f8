//! Core domain types
//!
//! Words and feedback patterns. Pure data with no I/O; everything here is
//! deterministic and independently testable.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::Word;
