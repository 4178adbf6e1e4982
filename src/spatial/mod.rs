//! Spatial data structures for the solver
//!
//! This module contains spatial-related functionality including:
//! - Directions, coordinates and neighbour enumeration
//! - The active set of uncollapsed coordinates
//! - Grid state management

/// Active set of uncollapsed coordinates
pub mod active;
/// Cardinal directions and grid coordinates
pub mod direction;
/// Grid state management and the commit path
pub mod grid;

pub use direction::{Coord, Direction};
pub use grid::GridState;
