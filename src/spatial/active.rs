//! Set of coordinates whose cells are still uncollapsed
//!
//! Membership is a bit per cell in row-major order (`y` outer, `x` inner), so
//! iteration order is fixed and independent of removal history.

use crate::spatial::direction::Coord;
use bitvec::prelude::*;

/// Uncollapsed coordinates of a `width x height` grid
#[derive(Clone, Debug)]
pub struct ActiveSet {
    members: BitVec,
    width: usize,
    height: usize,
    len: usize,
}

impl ActiveSet {
    /// Create a set containing every coordinate of the grid
    pub fn full(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            members: bitvec![1; len],
            width,
            height,
            len,
        }
    }

    const fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    const fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }

    /// Test membership
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord)
            .and_then(|index| self.members.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Remove a coordinate, returning whether it was present
    pub fn remove(&mut self, coord: Coord) -> bool {
        let Some(index) = self.index_of(coord) else {
            return false;
        };
        let was_present = self.members.get(index).as_deref().copied().unwrap_or(false);
        if was_present {
            self.members.set(index, false);
            self.len -= 1;
        }
        was_present
    }

    /// Number of uncollapsed coordinates
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether every cell has collapsed
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter_ones().map(|index| self.coord_of(index))
    }

    /// The `n`-th member in row-major order
    pub fn nth(&self, n: usize) -> Option<Coord> {
        self.iter().nth(n)
    }
}
