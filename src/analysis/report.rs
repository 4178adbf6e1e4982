//! Quality summary of a generated grid
//!
//! Counts fallback substitutions and "seams", adjacent collapsed pairs whose
//! facing sides disagree. Seams between two catalog tiles indicate a solver
//! bug; seams next to a fallback tile are the expected cost of a contradiction.

use crate::catalog::{TileCatalog, TileRef};
use crate::spatial::{Coord, Direction, GridState};
use std::fmt;

/// Summary statistics for one grid
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Total cells in the grid
    pub cells: usize,
    /// Cells that have been committed
    pub collapsed: usize,
    /// Cells committed to the fallback tile
    pub fallbacks: usize,
    /// Placement count per catalog tile
    pub tile_tally: Vec<usize>,
    /// Mismatched edges between two catalog tiles
    pub catalog_seams: usize,
    /// Mismatched edges with a fallback tile on at least one side
    pub fallback_seams: usize,
}

impl GenerationReport {
    /// Analyse a grid state against its catalog
    pub fn from_state(grid_state: &GridState, catalog: &TileCatalog) -> Self {
        let mut report = Self {
            cells: grid_state.cell_count(),
            tile_tally: vec![0; catalog.len()],
            ..Self::default()
        };

        for y in 0..grid_state.height() {
            for x in 0..grid_state.width() {
                let coord = Coord::new(x, y);
                let Some(tile) = grid_state.tile_at(coord) else {
                    continue;
                };

                report.collapsed += 1;
                match tile {
                    TileRef::Catalog(id) => {
                        if let Some(count) = report.tile_tally.get_mut(id) {
                            *count += 1;
                        }
                    }
                    TileRef::Fallback => report.fallbacks += 1,
                }

                // Up and Right visit each shared edge once
                for direction in [Direction::Up, Direction::Right] {
                    let Some(other) = coord
                        .step(direction, grid_state.width(), grid_state.height())
                        .and_then(|neighbor| grid_state.tile_at(neighbor))
                    else {
                        continue;
                    };
                    let (Some(a), Some(b)) = (catalog.sides_of(tile), catalog.sides_of(other))
                    else {
                        continue;
                    };
                    if a.matches(b, direction) {
                        continue;
                    }
                    if tile == TileRef::Fallback || other == TileRef::Fallback {
                        report.fallback_seams += 1;
                    } else {
                        report.catalog_seams += 1;
                    }
                }
            }
        }

        report
    }

    /// Fraction of collapsed cells that needed the fallback tile
    pub fn fallback_rate(&self) -> f64 {
        if self.collapsed == 0 {
            0.0
        } else {
            self.fallbacks as f64 / self.collapsed as f64
        }
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} cells collapsed, {} fallbacks ({:.1}%), {} catalog seams, {} fallback seams",
            self.collapsed,
            self.cells,
            self.fallbacks,
            self.fallback_rate() * 100.0,
            self.catalog_seams,
            self.fallback_seams
        )
    }
}
