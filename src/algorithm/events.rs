//! Materialization requests and contradiction diagnostics emitted by the solver
//!
//! A [`Placement`] is a placed instance; the tile type it refers to lives in
//! the catalog. Hosts receive both through a [`PlacementSink`].

use crate::catalog::TileRef;
use crate::spatial::direction::Coord;

/// Request to materialize a tile at a grid coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Tile committed to the cell
    pub tile: TileRef,
    /// Grid coordinate of the cell
    pub coord: Coord,
    /// Zero-based commit number within the run
    pub step: usize,
}

/// Why a cell ended up without candidates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContradictionCause {
    /// The cell was selected for collapse with an empty candidate set
    Selected,
    /// Propagation from `origin` removed its last candidate
    Propagated {
        /// The cell whose collapse emptied this one
        origin: Coord,
    },
}

/// A fallback substitution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// Cell that received the fallback tile
    pub coord: Coord,
    /// How the contradiction arose
    pub cause: ContradictionCause,
}

/// Receiver for solver output
pub trait PlacementSink {
    /// Called exactly once per committed cell
    fn place(&mut self, placement: &Placement);

    /// Called once per fallback substitution, before its placement
    fn contradiction(&mut self, _contradiction: &Contradiction) {}
}

/// Discards all output
impl PlacementSink for () {
    fn place(&mut self, _placement: &Placement) {}
}

impl PlacementSink for Vec<Placement> {
    fn place(&mut self, placement: &Placement) {
        self.push(*placement);
    }
}

/// Records placements and contradictions in emission order
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// Every placement
    pub placements: Vec<Placement>,
    /// Every fallback substitution
    pub contradictions: Vec<Contradiction>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements that used the fallback tile
    pub fn fallback_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(|placement| placement.tile == TileRef::Fallback)
    }
}

impl PlacementSink for EventLog {
    fn place(&mut self, placement: &Placement) {
        self.placements.push(*placement);
    }

    fn contradiction(&mut self, contradiction: &Contradiction) {
        self.contradictions.push(*contradiction);
    }
}

impl<S: PlacementSink + ?Sized> PlacementSink for &mut S {
    fn place(&mut self, placement: &Placement) {
        (**self).place(placement);
    }

    fn contradiction(&mut self, contradiction: &Contradiction) {
        (**self).contradiction(contradiction);
    }
}
