//! Distance matrix, the reference Floyd-Warshall and test graph generation.

pub mod dist;
pub mod floyd_naive;
pub mod generate;

pub use dist::{DistMatrix, INF, Weight};
