//! Dense distance matrix.

use std::fmt;

use crate::error::{ApspError, Result};

/// Edge / path weight.
pub type Weight = i32;

/// "No known path" sentinel.
///
/// Finite weights stay below this value, so the sum of two finite operands
/// (at most `2 * (INF - 1)`) always fits in a `Weight`.
pub const INF: Weight = 1_000_000_000;

/// An owned N×N distance matrix, row-major.
///
/// Entry `(i, j)` lives at offset `i * n + j`. The diagonal is zero and every
/// entry is either a non-negative weight or [`INF`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistMatrix {
    n: usize,
    data: Vec<Weight>,
}

impl DistMatrix {
    /// A graph of `n` vertices with no edges.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "matrix must have at least one vertex");
        let mut data = vec![INF; n * n];
        for i in 0..n {
            data[i * n + i] = 0;
        }
        DistMatrix { n, data }
    }

    /// Wrap a row-major buffer, checking size, diagonal and weight range.
    pub fn from_vec(data: Vec<Weight>, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(ApspError::EmptyMatrix);
        }
        if data.len() != n * n {
            return Err(ApspError::SizeMismatch {
                expected: n * n,
                got: data.len(),
            });
        }
        for i in 0..n {
            for j in 0..n {
                let value = data[i * n + j];
                if i == j && value != 0 {
                    return Err(ApspError::NonZeroDiagonal { vertex: i, value });
                }
                if !(0..=INF).contains(&value) {
                    return Err(ApspError::WeightOutOfRange {
                        row: i,
                        col: j,
                        value,
                    });
                }
            }
        }
        Ok(DistMatrix { n, data })
    }

    /// Build from a directed edge list `(from, to, weight)`.
    ///
    /// Parallel edges keep the cheapest weight. Self-loops are only accepted
    /// with weight 0.
    pub fn from_edges(n: usize, edges: &[(usize, usize, Weight)]) -> Result<Self> {
        if n == 0 {
            return Err(ApspError::EmptyMatrix);
        }
        let mut matrix = DistMatrix::new(n);
        for &(from, to, weight) in edges {
            for vertex in [from, to] {
                if vertex >= n {
                    return Err(ApspError::VertexOutOfRange { vertex, n });
                }
            }
            if !(0..INF).contains(&weight) {
                return Err(ApspError::WeightOutOfRange {
                    row: from,
                    col: to,
                    value: weight,
                });
            }
            if from == to {
                if weight != 0 {
                    return Err(ApspError::NonZeroDiagonal {
                        vertex: from,
                        value: weight,
                    });
                }
                continue;
            }
            let slot = &mut matrix.data[from * n + to];
            *slot = (*slot).min(weight);
        }
        Ok(matrix)
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Weight {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, weight: Weight) {
        self.data[i * self.n + j] = weight;
    }

    /// True if a path from `i` to `j` is known.
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != INF
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Weight] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Weight> {
        self.data
    }
}

impl fmt::Display for DistMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.n) {
            let cells: Vec<String> = row
                .iter()
                .map(|&w| {
                    if w == INF {
                        "∞".to_string()
                    } else {
                        w.to_string()
                    }
                })
                .collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
