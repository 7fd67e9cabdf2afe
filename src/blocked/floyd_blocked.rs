//! Single-threaded blocked Floyd-Warshall.

use super::phase::Phase;
use super::tiles::TileGrid;
use crate::kernels::SharedDist;
use crate::matrix::dist::Weight;

/// Cache-blocked Floyd-Warshall on the calling thread.
///
/// Runs the same pivot / phase sequence as the parallel engine, item after
/// item, without a barrier. Handles a ragged last tile when `block`
/// doesn't divide `n`.
///
/// # Panics
///
/// Panics if `dist.len() != n * n` or `block` is outside `1..=n`.
pub fn floyd_blocked(dist: &mut [Weight], n: usize, block: usize) {
    assert_eq!(dist.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    assert!(
        (1..=n).contains(&block),
        "block size {} must be in 1..={}",
        block,
        n
    );

    let grid = TileGrid::new(n, block);
    let shared = SharedDist::new(dist, n);

    for m in 0..grid.count() {
        let mut phase = Some(Phase::FIRST);
        while let Some(p) = phase {
            for idx in 0..p.work_len(&grid) {
                // SAFETY: one thread, items run strictly one after another
                // and phases in order.
                unsafe { p.work_item(&grid, m, idx).run(&shared, &grid, m) };
            }
            phase = p.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::floyd_naive::floyd_sequential;
    use crate::matrix::generate::random_dense;

    #[test]
    fn test_matches_sequential_for_every_block() {
        for n in [1, 2, 3, 5, 8, 13] {
            let base = random_dense(n, n as u64);
            let mut expected = base.as_slice().to_vec();
            floyd_sequential(&mut expected, n);

            for block in 1..=n {
                let mut got = base.as_slice().to_vec();
                floyd_blocked(&mut got, n, block);
                assert_eq!(expected, got, "n={} block={}", n, block);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_block_larger_than_n_panics() {
        let mut dist = vec![0; 4];
        floyd_blocked(&mut dist, 2, 3);
    }
}
