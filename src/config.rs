//! Run configuration.

use crate::error::{ApspError, Result};

/// Tile size used when nothing else is asked for.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Block size and thread budget for a blocked run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Tile edge length B.
    pub block_size: usize,
    /// Maximum worker threads. The run may use fewer on small graphs.
    pub num_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            block_size: DEFAULT_BLOCK_SIZE,
            num_threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Block size for an `n`-vertex graph: the configured size, clamped so
    /// that small graphs become a single tile.
    pub fn block_for(&self, n: usize) -> usize {
        self.block_size.min(n)
    }

    /// Check the configuration against an `n`-vertex graph.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(ApspError::EmptyMatrix);
        }
        if self.block_size == 0 {
            return Err(ApspError::InvalidBlockSize {
                block: self.block_size,
                n,
            });
        }
        if self.num_threads == 0 {
            return Err(ApspError::InvalidThreadCount);
        }
        Ok(())
    }
}
