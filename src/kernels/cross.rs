//! Phase 2: tiles sharing a row or column band with the pivot tile.
//!
//! Row tiles (m, jb) and column tiles (ib, m) are disjoint from each other
//! and from (m, m), so every call in this phase can run on its own thread.

use super::{SharedDist, relax_block};
use crate::blocked::tiles::TileGrid;

/// Relaxes row tile (m, jb), jb != m.
///
/// Pulls the pivot tile's relaxed values across the pivot's row band:
/// `dist[i][k]` comes from (m, m), `dist[k][j]` from the target itself.
///
/// # Safety
///
/// Tile (m, m) must be final for pivot `m` and not written concurrently.
/// No other thread may read or write tile (m, jb).
pub unsafe fn relax_row(dist: &SharedDist<'_>, grid: &TileGrid, m: usize, jb: usize) {
    debug_assert_ne!(jb, m);
    let pivots = grid.range(m);
    unsafe { relax_block(dist, pivots.clone(), pivots, grid.range(jb)) }
}

/// Relaxes column tile (ib, m), ib != m.
///
/// `dist[i][k]` comes from the target itself, `dist[k][j]` from (m, m).
///
/// # Safety
///
/// Tile (m, m) must be final for pivot `m` and not written concurrently.
/// No other thread may read or write tile (ib, m).
pub unsafe fn relax_col(dist: &SharedDist<'_>, grid: &TileGrid, ib: usize, m: usize) {
    debug_assert_ne!(ib, m);
    let pivots = grid.range(m);
    unsafe { relax_block(dist, pivots.clone(), grid.range(ib), pivots) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::dist::{INF, Weight};

    // 4x4, block 2. Pivot tile 0 already relaxed: 0 -> 1 costs 1.
    #[rustfmt::skip]
    fn pivot_relaxed() -> Vec<Weight> {
        vec![
            0,   1,   INF, INF,
            INF, 0,   4,   INF,
            INF, INF, 0,   INF,
            7,   INF, INF, 0,
        ]
    }

    #[test]
    fn test_row_extends_through_pivot_tile() {
        let mut buf = pivot_relaxed();
        let grid = TileGrid::new(4, 2);
        {
            let shared = SharedDist::new(&mut buf, 4);
            unsafe { relax_row(&shared, &grid, 0, 1) };
        }
        // 0 -> 1 -> 2
        assert_eq!(buf[2], 5);
        // column tile untouched
        assert_eq!(buf[3 * 4 + 1], INF);
    }

    #[test]
    fn test_col_extends_into_pivot_tile() {
        let mut buf = pivot_relaxed();
        let grid = TileGrid::new(4, 2);
        {
            let shared = SharedDist::new(&mut buf, 4);
            unsafe { relax_col(&shared, &grid, 1, 0) };
        }
        // 3 -> 0 -> 1
        assert_eq!(buf[3 * 4 + 1], 8);
        // row tile untouched
        assert_eq!(buf[2], INF);
    }
}
