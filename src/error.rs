use thiserror::Error;

use crate::matrix::dist::Weight;

/// Errors reported by the validating layers around the kernel.
///
/// The relaxation kernels themselves never fail; these come from matrix
/// construction, configuration checks and result verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApspError {
    #[error("matrix must have at least one vertex")]
    EmptyMatrix,
    #[error("buffer size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch { expected: usize, got: usize },
    #[error("diagonal entry for vertex {vertex} is {value}, expected 0")]
    NonZeroDiagonal { vertex: usize, value: Weight },
    #[error("weight {value} at ({row}, {col}) is outside the valid range")]
    WeightOutOfRange { row: usize, col: usize, value: Weight },
    #[error("vertex {vertex} out of range for a graph of {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },
    #[error("block size {block} invalid for n = {n}: expected 1 <= block <= n")]
    InvalidBlockSize { block: usize, n: usize },
    #[error("thread count must be at least 1")]
    InvalidThreadCount,
    #[error("distance mismatch at ({row}, {col}): expected {expected}, got {got}")]
    Mismatch {
        row: usize,
        col: usize,
        expected: Weight,
        got: Weight,
    },
    #[error("triangle inequality violated: d[{i}][{j}] > d[{i}][{k}] + d[{k}][{j}]")]
    TriangleViolation { i: usize, j: usize, k: usize },
}

pub type Result<T> = std::result::Result<T, ApspError>;
