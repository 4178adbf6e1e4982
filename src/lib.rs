//! Greedy edge-matching tile generation with wave function collapse
//!
//! Cells of a fixed grid start with every catalog tile as a candidate. The
//! solver repeatedly picks the cell with the fewest candidates next to the
//! previous collapse, commits one candidate at random and prunes the four
//! neighbours to tiles whose facing sides agree. Cells left without
//! candidates receive a designated fallback tile; nothing is ever undone.

#![forbid(unsafe_code)]

/// Cell selection, collapse, propagation and the step driver
pub mod algorithm;
/// Quality statistics of generated grids
pub mod analysis;
/// Tile types, compatibility rule and catalog sources
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Grid coordinates, the active set and grid state
pub mod spatial;

pub use algorithm::events::{Contradiction, ContradictionCause, EventLog, Placement, PlacementSink};
pub use algorithm::executor::{Solver, SolverConfig};
pub use catalog::{Sides, TileCatalog, TileRef, TileType};
pub use io::error::{GenerationError, Result};
