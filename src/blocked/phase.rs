//! Per-pivot phase sequence and the work items of each phase.

use super::tiles::{Tile, TileGrid};
use crate::kernels::cross::{relax_col, relax_row};
use crate::kernels::diagonal::relax_diagonal;
use crate::kernels::peripheral::relax_peripheral;
use crate::kernels::SharedDist;

/// One step of a pivot iteration. Every pivot runs
/// `Diagonal -> Cross -> Peripheral`, never reordered: each phase reads
/// what the previous one wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Diagonal,
    Cross,
    Peripheral,
}

/// A single tile update inside a phase, relative to the current pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItem {
    Diagonal,
    Row { jb: usize },
    Col { ib: usize },
    Peripheral { ib: usize, jb: usize },
}

impl Phase {
    pub const FIRST: Phase = Phase::Diagonal;

    /// The phase after this one, or `None` once the pivot is done.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Diagonal => Some(Phase::Cross),
            Phase::Cross => Some(Phase::Peripheral),
            Phase::Peripheral => None,
        }
    }

    /// Number of independent work items in this phase.
    pub fn work_len(self, grid: &TileGrid) -> usize {
        let others = grid.count() - 1;
        match self {
            Phase::Diagonal => 1,
            Phase::Cross => 2 * others,
            Phase::Peripheral => others * others,
        }
    }

    /// Maps `idx` in `0..work_len` to a work item for pivot `m`.
    ///
    /// Cross items list the row tiles first, then the column tiles.
    /// Peripheral items walk the non-pivot tiles row by row.
    pub fn work_item(self, grid: &TileGrid, m: usize, idx: usize) -> WorkItem {
        let others = grid.count() - 1;
        debug_assert!(idx < self.work_len(grid));
        match self {
            Phase::Diagonal => WorkItem::Diagonal,
            Phase::Cross if idx < others => WorkItem::Row {
                jb: skip_pivot(idx, m),
            },
            Phase::Cross => WorkItem::Col {
                ib: skip_pivot(idx - others, m),
            },
            Phase::Peripheral => WorkItem::Peripheral {
                ib: skip_pivot(idx / others, m),
                jb: skip_pivot(idx % others, m),
            },
        }
    }
}

impl WorkItem {
    /// The tile this item writes.
    pub fn target(self, grid: &TileGrid, m: usize) -> Tile {
        match self {
            WorkItem::Diagonal => grid.tile(m, m),
            WorkItem::Row { jb } => grid.tile(m, jb),
            WorkItem::Col { ib } => grid.tile(ib, m),
            WorkItem::Peripheral { ib, jb } => grid.tile(ib, jb),
        }
    }

    /// Tiles this item reads besides its target.
    pub fn sources(self, grid: &TileGrid, m: usize) -> Vec<Tile> {
        match self {
            WorkItem::Diagonal => Vec::new(),
            WorkItem::Row { .. } | WorkItem::Col { .. } => vec![grid.tile(m, m)],
            WorkItem::Peripheral { ib, jb } => vec![grid.tile(ib, m), grid.tile(m, jb)],
        }
    }

    /// Run the kernel for this item.
    ///
    /// # Safety
    ///
    /// The item's sources must be final for pivot `m`, and no other thread
    /// may touch its target or write its sources while it runs. Distinct
    /// items of the same phase satisfy this for each other.
    pub unsafe fn run(self, dist: &SharedDist<'_>, grid: &TileGrid, m: usize) {
        unsafe {
            match self {
                WorkItem::Diagonal => relax_diagonal(dist, grid, m),
                WorkItem::Row { jb } => relax_row(dist, grid, m, jb),
                WorkItem::Col { ib } => relax_col(dist, grid, ib, m),
                WorkItem::Peripheral { ib, jb } => relax_peripheral(dist, grid, m, ib, jb),
            }
        }
    }
}

/// Dense index over the tiles other than `m` -> tile index.
fn skip_pivot(idx: usize, m: usize) -> usize {
    if idx < m { idx } else { idx + 1 }
}
