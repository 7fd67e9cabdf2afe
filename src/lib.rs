//! All-pairs shortest paths in Rust with a blocked, parallel Floyd-Warshall.
//!
//! Plain Floyd-Warshall streams the whole N×N matrix through cache once
//! per vertex. The blocked version cuts the matrix into B×B tiles and, for
//! each pivot tile, relaxes the pivot tile, then its row and column bands,
//! then everything else. Each step only touches three tiles at a time, and
//! the tiles within a step are independent, so a fixed team of threads can
//! share them with nothing but a barrier between steps.
//!
//! ## Usage
//!
//! ```
//! use apsp::{relax_all_pairs, INF};
//!
//! // 0 -> 1 costs 5, 1 -> 2 costs 3
//! let mut dist = vec![
//!     0,   5,   INF,
//!     INF, 0,   3,
//!     INF, INF, 0,
//! ];
//!
//! relax_all_pairs(&mut dist, 3, 2);
//!
//! assert_eq!(dist[2], 8);     // 0 -> 2 via 1
//! assert_eq!(dist[3], INF);   // no way back from 1 to 0
//! ```
//!
//! With validation instead of panics:
//!
//! ```
//! use apsp::{relax_all_pairs_with, Config, DistMatrix};
//!
//! let mut graph = DistMatrix::from_edges(4, &[(0, 1, 2), (1, 2, 2), (2, 3, 2)])?;
//! relax_all_pairs_with(&mut graph, &Config::default().with_block_size(2))?;
//!
//! assert_eq!(graph.get(0, 3), 6);
//! # Ok::<(), apsp::ApspError>(())
//! ```
//!
//! ## What's inside
//!
//! - Tile addressing with a ragged last tile for any block size
//! - Diagonal, cross and peripheral relaxation kernels
//! - One fork-join thread team per run, three barriers per pivot
//! - The unblocked algorithm as a reference, plus result verification

pub mod blocked;
pub mod config;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod threaded;
pub mod verify;

pub use config::Config;
pub use error::{ApspError, Result};
pub use matrix::dist::{DistMatrix, INF, Weight};
pub use matrix::floyd_naive::floyd_sequential;

use threaded::engine::floyd_blocked_mt;
use threaded::schedule::choose_thread_count;

/// All-pairs shortest paths, in place.
///
/// `dist` is an N×N row-major matrix with a zero diagonal and either a
/// non-negative weight or [`INF`] everywhere else. On return it holds the
/// shortest distance between every ordered pair, [`INF`] where there is no
/// path. Uses up to one thread per CPU, fewer for small graphs.
///
/// # Panics
///
/// Panics if `dist.len() != n * n` or `block` is outside `1..=n`.
pub fn relax_all_pairs(dist: &mut [Weight], n: usize, block: usize) {
    relax_all_pairs_parallel(dist, n, block, num_cpus::get());
}

/// Same as [`relax_all_pairs`] but with an explicit thread budget.
///
/// Thread count adapts to graph size - small graphs use fewer threads
/// because the barriers cost more than they save.
pub fn relax_all_pairs_parallel(dist: &mut [Weight], n: usize, block: usize, num_threads: usize) {
    assert_eq!(dist.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    assert!(
        (1..=n).contains(&block),
        "block size {} must be in 1..={}",
        block,
        n
    );

    let threads = choose_thread_count(n, block, num_threads);
    floyd_blocked_mt(dist, n, block, threads);
}

/// Validated entry point for an owned [`DistMatrix`].
///
/// The block size is clamped to the number of vertices, so the default
/// configuration works for graphs of any size.
pub fn relax_all_pairs_with(matrix: &mut DistMatrix, config: &Config) -> Result<()> {
    let n = matrix.n();
    config.validate(n)?;
    let block = config.block_for(n);
    let threads = choose_thread_count(n, block, config.num_threads);
    floyd_blocked_mt(matrix.as_mut_slice(), n, block, threads);
    Ok(())
}
