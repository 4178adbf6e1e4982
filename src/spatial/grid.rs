//! Solver state: cells, the active set and the last-collapsed hint
//!
//! `GridState` is the only owner of cell data for a run. Collapsing a cell
//! goes through [`GridState::commit`], which keeps the active set in step with
//! the per-cell `collapsed` flags.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::catalog::TileRef;
use crate::spatial::active::ActiveSet;
use crate::spatial::direction::{Coord, Direction};

/// One grid position
#[derive(Clone, Debug)]
pub struct Cell {
    /// Set once the cell is committed; never reverts
    pub collapsed: bool,
    /// Tiles this cell could still become; only shrinks
    pub candidates: TileBitset,
    /// Tile committed to this cell
    pub tile: Option<TileRef>,
}

impl Cell {
    /// Create an uncollapsed cell with the given candidates
    pub const fn new(candidates: TileBitset) -> Self {
        Self {
            collapsed: false,
            candidates,
            tile: None,
        }
    }
}

/// Grid state for a single generation run
#[derive(Clone, Debug)]
pub struct GridState {
    /// Cells indexed by `[y, x]`
    pub cells: Array2<Cell>,

    /// Coordinates not yet collapsed
    pub active: ActiveSet,

    /// Most recent non-fallback collapse, used as a selection hint
    pub last_collapsed: Option<Coord>,

    /// Number of commits so far, fallbacks included
    pub collapse_count: usize,

    /// Number of commits that used the fallback tile
    pub fallback_count: usize,

    /// Grid dimensions (width, height)
    pub dimensions: (usize, usize),
}

impl GridState {
    /// Create a fresh grid where every cell may become any tile
    pub fn new(width: usize, height: usize, tile_count: usize) -> Self {
        let full = TileBitset::all(tile_count);
        Self {
            cells: Array2::from_shape_fn((height, width), |_| Cell::new(full.clone())),
            active: ActiveSet::full(width, height),
            last_collapsed: None,
            collapse_count: 0,
            fallback_count: 0,
            dimensions: (width, height),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Borrow a cell
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get([coord.y, coord.x])
    }

    /// Mutably borrow a cell
    pub fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut([coord.y, coord.x])
    }

    /// Candidate count of an uncollapsed cell
    pub fn entropy(&self, coord: Coord) -> Option<usize> {
        self.cell(coord)
            .filter(|cell| !cell.collapsed)
            .map(|cell| cell.candidates.count())
    }

    /// Whether the cell at `coord` exists and is uncollapsed
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|cell| !cell.collapsed)
    }

    /// Tile committed at `coord`
    pub fn tile_at(&self, coord: Coord) -> Option<TileRef> {
        self.cell(coord).and_then(|cell| cell.tile)
    }

    /// In-bounds neighbours of `coord` in direction order
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + use<> {
        coord.neighbors(self.width(), self.height())
    }

    /// Commit `tile` to the cell at `coord`
    ///
    /// Marks it collapsed, clears its candidates and removes it from the
    /// active set. Returns the step number of this commit, or `None` if the
    /// cell was already collapsed or out of bounds.
    pub fn commit(&mut self, coord: Coord, tile: TileRef) -> Option<usize> {
        let cell = self.cells.get_mut([coord.y, coord.x])?;
        if cell.collapsed {
            return None;
        }
        cell.collapsed = true;
        cell.candidates.clear();
        cell.tile = Some(tile);
        self.active.remove(coord);

        let step = self.collapse_count;
        self.collapse_count += 1;
        if tile == TileRef::Fallback {
            self.fallback_count += 1;
        }
        Some(step)
    }

    /// Whether every cell has collapsed
    pub const fn is_complete(&self) -> bool {
        self.active.is_empty()
    }
}
