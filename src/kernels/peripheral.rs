//! Phase 3: everything outside the pivot's row and column bands.

use super::{SharedDist, relax_block};
use crate::blocked::tiles::TileGrid;

/// Relaxes tile (ib, jb) with ib != m and jb != m.
///
/// `dist[i][k]` is read from column tile (ib, m) and `dist[k][j]` from row
/// tile (m, jb); the target is never one of its own operands here.
///
/// # Safety
///
/// Tiles (ib, m) and (m, jb) must be final for pivot `m` and not written
/// concurrently. No other thread may read or write tile (ib, jb).
pub unsafe fn relax_peripheral(
    dist: &SharedDist<'_>,
    grid: &TileGrid,
    m: usize,
    ib: usize,
    jb: usize,
) {
    debug_assert!(ib != m && jb != m);
    unsafe { relax_block(dist, grid.range(m), grid.range(ib), grid.range(jb)) }
}
