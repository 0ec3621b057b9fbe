//! Configuration for nearest-neighbour search.

use serde::{Deserialize, Serialize};

use crate::error::{LexdistError, Result};

/// Configuration for [`NearestNeighborSearch`](crate::search::NearestNeighborSearch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of neighbours returned per query.
    pub k: usize,

    /// Skip lexicon entries whose length differs from the query by more than
    /// this many symbols. `None` scores every entry.
    pub max_length_diff: Option<usize>,

    /// Worker thread count.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 1,
            max_length_diff: None,
            threads: None,
        }
    }
}

impl SearchConfig {
    /// Create a configuration returning the `k` nearest entries.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the length-difference bound.
    pub fn with_max_length_diff(mut self, max_length_diff: usize) -> Self {
        self.max_length_diff = Some(max_length_diff);
        self
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Worker count after applying the CPU-count default.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Check the configuration for values the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(LexdistError::invalid_argument(
                "number of neighbours must be at least 1",
            ));
        }
        if self.threads == Some(0) {
            return Err(LexdistError::invalid_argument(
                "thread count must be at least 1",
            ));
        }
        Ok(())
    }
}
