//! Multi-threaded blocked Floyd-Warshall.
//!
//! One fork-join team runs the entire pivot loop. Threads coordinate only
//! through a barrier at the end of every phase; within a phase each tile
//! is written by exactly one thread.
//!
//! - `engine`: the team and its per-pivot phase loop
//! - `schedule`: static work split and adaptive thread count

pub mod engine;
pub mod schedule;
