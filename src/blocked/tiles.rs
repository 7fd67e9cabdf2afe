//! Tile addressing for the blocked algorithm.
//!
//! Maps a dimension `n` and a block size `b` onto a grid of
//! `ceil(n / b)` tiles per side. The last tile in each dimension is
//! smaller when `b` doesn't divide `n`.

use std::ops::Range;

/// The tile grid for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    n: usize,
    block: usize,
    tiles: usize,
}

/// A rectangular region of the matrix: a row range and a column range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl TileGrid {
    /// # Panics
    ///
    /// Panics if `block == 0`.
    pub fn new(n: usize, block: usize) -> Self {
        assert!(block >= 1, "block size must be at least 1");
        TileGrid {
            n,
            block,
            tiles: n.div_ceil(block),
        }
    }

    /// Tiles per dimension (M).
    pub fn count(&self) -> usize {
        self.tiles
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn block(&self) -> usize {
        self.block
    }

    /// Index range covered by tile `t` along either dimension.
    pub fn range(&self, t: usize) -> Range<usize> {
        debug_assert!(t < self.tiles, "tile {} out of {}", t, self.tiles);
        let start = t * self.block;
        start..(start + self.block).min(self.n)
    }

    /// Tile at grid position (`ib`, `jb`).
    pub fn tile(&self, ib: usize, jb: usize) -> Tile {
        Tile {
            rows: self.range(ib),
            cols: self.range(jb),
        }
    }
}

impl Tile {
    /// True if the two regions share at least one matrix cell.
    pub fn overlaps(&self, other: &Tile) -> bool {
        ranges_intersect(&self.rows, &other.rows) && ranges_intersect(&self.cols, &other.cols)
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.rows.contains(&i) && self.cols.contains(&j)
    }
}

fn ranges_intersect(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
