//! Random dense test graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dist::{DistMatrix, INF, Weight};

/// Probability that an off-diagonal pair has no edge.
pub const MISSING_EDGE_PROBABILITY: f64 = 0.10;

/// Largest generated edge weight (weights are uniform in `1..=MAX_WEIGHT`).
pub const MAX_WEIGHT: Weight = 20;

/// Generate a dense random graph of `n` vertices.
///
/// Diagonal is 0, about 10% of the other entries are [`INF`] and the rest
/// are uniform in `1..=MAX_WEIGHT`. The same seed always produces the same
/// matrix.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn random_dense(n: usize, seed: u64) -> DistMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = DistMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let weight = if rng.gen_bool(MISSING_EDGE_PROBABILITY) {
                INF
            } else {
                rng.gen_range(1..=MAX_WEIGHT)
            };
            matrix.set(i, j, weight);
        }
    }
    matrix
}

/// Like [`random_dense`] but with a caller-chosen edge density, for sparse
/// reachability tests.
pub fn random_with_density(n: usize, edge_probability: f64, seed: u64) -> DistMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = DistMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(edge_probability) {
                matrix.set(i, j, rng.gen_range(1..=MAX_WEIGHT));
            }
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        assert_eq!(random_dense(17, 42), random_dense(17, 42));
        assert_ne!(random_dense(17, 42), random_dense(17, 43));
    }

    #[test]
    fn test_weights_in_range() {
        let m = random_dense(40, 7);
        let mut missing = 0;
        for i in 0..40 {
            assert_eq!(m.get(i, i), 0);
            for j in 0..40 {
                let w = m.get(i, j);
                if w == INF {
                    missing += 1;
                } else if i != j {
                    assert!((1..=MAX_WEIGHT).contains(&w), "weight {} out of range", w);
                }
            }
        }
        // 1560 off-diagonal entries, expect ~156 missing
        assert!(missing > 50 && missing < 300, "missing = {}", missing);
    }

    #[test]
    fn test_zero_density_has_no_edges() {
        assert_eq!(random_with_density(5, 0.0, 1), DistMatrix::new(5));
    }
}
