//! Tile relaxation kernels for blocked Floyd-Warshall.
//!
//! Each kernel relaxes one tile of the distance matrix against the pivot
//! vertices of tile `m`. They differ only in which tile they write and
//! where their two operands come from:
//!
//! - `diagonal`: tile (m, m), operands from the same tile
//! - `cross`: row tiles (m, jb) and column tiles (ib, m), one operand from
//!   the already-relaxed diagonal tile
//! - `peripheral`: every other tile (ib, jb), operands from the cross tiles
//!
//! All of them run through [`relax_block`] on a [`SharedDist`].

pub mod cross;
pub mod diagonal;
pub mod peripheral;
pub mod shared;

use std::ops::Range;

use crate::matrix::dist::INF;
pub use shared::SharedDist;

/// Relax `dist[i][j]` through every pivot `k` for `i` in `rows` and `j` in
/// `cols`, in k-i-j order.
///
/// Candidates with an [`INF`] leg are skipped before the addition.
///
/// # Safety
///
/// All ranges must lie within `0..dist.n()`. While this runs, no other
/// thread may write the target region `rows × cols`, the column band
/// `rows × pivots` or the row band `pivots × cols`, and no other thread
/// may read the target region.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn relax_block(
    dist: &SharedDist<'_>,
    pivots: Range<usize>,
    rows: Range<usize>,
    cols: Range<usize>,
) {
    for k in pivots {
        for i in rows.clone() {
            let dik = dist.get(i, k);
            if dik == INF {
                continue;
            }
            for j in cols.clone() {
                let dkj = dist.get(k, j);
                if dkj == INF {
                    continue;
                }
                let candidate = dik + dkj;
                if candidate < dist.get(i, j) {
                    dist.set(i, j, candidate);
                }
            }
        }
    }
}
