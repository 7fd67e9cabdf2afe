//! Cache-blocked Floyd-Warshall.
//!
//! The matrix is cut into B×B tiles so that the three tiles a kernel
//! touches stay in cache together. For each pivot tile `m`:
//!
//! 1. relax tile (m, m) on its own
//! 2. relax its row band (m, *) and column band (*, m)
//! 3. relax everything else from those two bands
//!
//! Modules:
//! - `tiles`: tile grid and index ranges
//! - `phase`: the three-phase sequence and its work items
//! - `floyd_blocked`: the single-threaded driver

pub mod floyd_blocked;
pub mod phase;
pub mod tiles;
