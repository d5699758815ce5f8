//! Word lists for a solving run
//!
//! Loads guess and answer lists from text files and checks they form a
//! single-length dictionary.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
