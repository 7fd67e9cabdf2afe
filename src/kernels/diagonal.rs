//! Phase 1: the pivot tile relaxes itself.

use super::{SharedDist, relax_block};
use crate::blocked::tiles::TileGrid;

/// Relaxes tile (m, m) using only its own vertices as pivots.
///
/// This is plain Floyd-Warshall restricted to the tile. Successive pivots
/// depend on each other, so it runs on one thread; its result feeds every
/// other kernel for pivot `m`.
///
/// # Safety
///
/// No other thread may read or write tile (m, m) while this runs.
pub unsafe fn relax_diagonal(dist: &SharedDist<'_>, grid: &TileGrid, m: usize) {
    let r = grid.range(m);
    unsafe { relax_block(dist, r.clone(), r.clone(), r) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::dist::INF;

    #[test]
    fn test_only_touches_pivot_tile() {
        // 4x4, block 2: chain 0 -> 1 -> 2 -> 3 plus 1 -> 0
        #[rustfmt::skip]
        let mut buf = vec![
            0,   1,   INF, INF,
            5,   0,   1,   INF,
            INF, INF, 0,   1,
            INF, INF, INF, 0,
        ];
        let grid = TileGrid::new(4, 2);
        {
            let shared = SharedDist::new(&mut buf, 4);
            unsafe { relax_diagonal(&shared, &grid, 0) };
        }
        // 0 -> 2 would need pivot 1 outside tile (0, 0)'s columns
        assert_eq!(buf[2], INF);
        assert_eq!(buf[4], 5);

        {
            let shared = SharedDist::new(&mut buf, 4);
            unsafe { relax_diagonal(&shared, &grid, 1) };
        }
        assert_eq!(buf[2 * 4 + 3], 1);
        assert_eq!(buf[3 * 4 + 2], INF);
    }

    #[test]
    fn test_chain_inside_tile() {
        #[rustfmt::skip]
        let mut buf = vec![
            0,   2,   INF,
            INF, 0,   3,
            1,   INF, 0,
        ];
        let grid = TileGrid::new(3, 3);
        {
            let shared = SharedDist::new(&mut buf, 3);
            unsafe { relax_diagonal(&shared, &grid, 0) };
        }
        #[rustfmt::skip]
        let expected = vec![
            0, 2, 5,
            4, 0, 3,
            1, 3, 0,
        ];
        assert_eq!(buf, expected);
    }
}
