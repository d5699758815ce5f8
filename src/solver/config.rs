//! Solver configuration
//!
//! Settings reach the core explicitly through [`SolverConfig`]; nothing in
//! the core reads process-wide state.

use crate::error::{Result, SolverError};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runtime settings for a solving session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Worker threads used to score guesses; `None` uses every available CPU
    pub threads: Option<usize>,
}

impl SolverConfig {
    #[must_use]
    pub const fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    /// Build the worker pool the selector runs on
    ///
    /// # Errors
    /// Returns `SolverError::ThreadPool` if rayon cannot spawn the workers.
    pub fn build_pool(&self) -> Result<ThreadPool> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("guess-scorer-{index}"));
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map_err(|e| SolverError::ThreadPool(e.to_string()))
    }
}
