//! Result checks against the unblocked algorithm.

use crate::error::{ApspError, Result};
use crate::matrix::dist::{INF, Weight};
use crate::matrix::floyd_naive::floyd_sequential;

/// First cell where `actual` differs from `expected`.
pub fn compare(expected: &[Weight], actual: &[Weight], n: usize) -> Result<()> {
    for buf in [expected, actual] {
        if buf.len() != n * n {
            return Err(ApspError::SizeMismatch {
                expected: n * n,
                got: buf.len(),
            });
        }
    }
    for (idx, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            return Err(ApspError::Mismatch {
                row: idx / n,
                col: idx % n,
                expected: e,
                got: a,
            });
        }
    }
    Ok(())
}

/// Re-solve `input` with the unblocked algorithm and compare to `output`.
pub fn verify_against_reference(input: &[Weight], output: &[Weight], n: usize) -> Result<()> {
    let mut expected = input.to_vec();
    if expected.len() != n * n {
        return Err(ApspError::SizeMismatch {
            expected: n * n,
            got: expected.len(),
        });
    }
    floyd_sequential(&mut expected, n);
    compare(&expected, output, n)
}

/// Check `d[i][j] <= d[i][k] + d[k][j]` wherever both legs are finite.
///
/// O(n³); meant for tests and `--verify` runs.
pub fn check_triangle_inequality(dist: &[Weight], n: usize) -> Result<()> {
    if dist.len() != n * n {
        return Err(ApspError::SizeMismatch {
            expected: n * n,
            got: dist.len(),
        });
    }
    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if dik == INF {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k * n + j];
                if dkj == INF {
                    continue;
                }
                if dist[i * n + j] > dik + dkj {
                    return Err(ApspError::TriangleViolation { i, j, k });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_reports_position() {
        let err = compare(&[0, 1, 2, 0], &[0, 1, 3, 0], 2).unwrap_err();
        assert_eq!(
            err,
            ApspError::Mismatch {
                row: 1,
                col: 0,
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_verify_catches_unrelaxed_output() {
        let input = vec![0, 1, INF, INF, 0, 1, INF, INF, 0];
        assert!(verify_against_reference(&input, &input, 3).is_err());

        let solved = vec![0, 1, 2, INF, 0, 1, INF, INF, 0];
        assert_eq!(verify_against_reference(&input, &solved, 3), Ok(()));
    }

    #[test]
    fn test_triangle_violation() {
        let dist = vec![0, 1, 5, INF, 0, 1, INF, INF, 0];
        assert_eq!(
            check_triangle_inequality(&dist, 3),
            Err(ApspError::TriangleViolation { i: 0, j: 2, k: 1 })
        );
    }

    #[test]
    fn test_size_checked() {
        assert!(matches!(
            check_triangle_inequality(&[0, 1, 2], 2),
            Err(ApspError::SizeMismatch { .. })
        ));
    }
}
