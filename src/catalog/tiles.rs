//! Tile types, openness signatures and the edge compatibility rule
//!
//! Two tiles may sit next to each other when the sides facing each other are
//! either both open or both closed. The catalog precomputes, for every tile
//! and direction, the set of tiles that satisfy this rule so propagation is a
//! single bitset intersection.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::Direction;
use std::collections::HashSet;
use std::fmt;

/// Index of a tile type within its catalog
pub type TileId = usize;

/// Openness of the four sides of a tile, indexed by [`Direction::index`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sides([bool; 4]);

impl Sides {
    /// No open side
    pub const CLOSED: Self = Self([false; 4]);

    /// Build from explicit up/right/down/left flags
    pub const fn new(up: bool, right: bool, down: bool, left: bool) -> Self {
        Self([up, right, down, left])
    }

    /// Build from the set of open directions
    pub fn from_open(open: &[Direction]) -> Self {
        let mut sides = Self::CLOSED;
        for &direction in open {
            sides.set(direction, true);
        }
        sides
    }

    /// Whether the side facing `direction` is open
    pub const fn is_open(self, direction: Direction) -> bool {
        let [up, right, down, left] = self.0;
        match direction {
            Direction::Up => up,
            Direction::Right => right,
            Direction::Down => down,
            Direction::Left => left,
        }
    }

    /// Change one side
    pub fn set(&mut self, direction: Direction, open: bool) {
        if let Some(side) = self.0.get_mut(direction.index()) {
            *side = open;
        }
    }

    /// Number of open sides
    pub fn open_count(self) -> usize {
        self.0.iter().filter(|&&open| open).count()
    }

    /// Whether `self` may sit with `other` placed in `direction` from it
    pub const fn matches(self, other: Self, direction: Direction) -> bool {
        self.is_open(direction) == other.is_open(direction.opposite())
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.open_count() == 0 {
            return write!(f, "-");
        }
        for direction in Direction::ALL {
            if self.is_open(direction) {
                write!(f, "{}", direction.letter())?;
            }
        }
        Ok(())
    }
}

/// A catalog entry: a named openness signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileType {
    /// Human-readable unique name
    pub name: String,
    /// Which sides connect to neighbours
    pub sides: Sides,
}

impl TileType {
    /// Create a tile type
    pub fn new(name: impl Into<String>, sides: Sides) -> Self {
        Self {
            name: name.into(),
            sides,
        }
    }
}

/// Reference to the tile chosen for a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileRef {
    /// A regular catalog tile
    Catalog(TileId),
    /// The designated fallback tile
    Fallback,
}

/// Ordered, immutable tile catalog with a designated fallback tile
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<TileType>,
    fallback: TileType,
    /// Openness signatures parallel to `tiles`
    sides: Vec<Sides>,
    /// Compatible neighbour sets indexed by tile then direction
    compatibility: Vec<[TileBitset; 4]>,
}

impl TileCatalog {
    /// Build a catalog and precompute its compatibility sets
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tiles` is empty
    /// - Two tiles (including the fallback) share a name
    pub fn new(tiles: Vec<TileType>, fallback: TileType) -> Result<Self> {
        if tiles.is_empty() {
            return Err(GenerationError::EmptyCatalog);
        }

        {
            let mut names = HashSet::with_capacity(tiles.len() + 1);
            for name in tiles.iter().chain(std::iter::once(&fallback)).map(|t| &t.name) {
                if !names.insert(name.as_str()) {
                    return Err(GenerationError::InvalidCatalog {
                        reason: format!("duplicate tile name '{name}'"),
                    });
                }
            }
        }

        let sides: Vec<Sides> = tiles.iter().map(|tile| tile.sides).collect();
        let compatibility = sides
            .iter()
            .map(|&origin| {
                Direction::ALL.map(|direction| {
                    TileBitset::from_indices(
                        sides
                            .iter()
                            .enumerate()
                            .filter(|&(_, &candidate)| origin.matches(candidate, direction))
                            .map(|(index, _)| index),
                        sides.len(),
                    )
                })
            })
            .collect();

        Ok(Self {
            tiles,
            fallback,
            sides,
            compatibility,
        })
    }

    /// Number of regular tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Regular tiles in catalog order
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Look up a regular tile
    pub fn tile(&self, id: TileId) -> Option<&TileType> {
        self.tiles.get(id)
    }

    /// The fallback tile
    pub const fn fallback(&self) -> &TileType {
        &self.fallback
    }

    /// Resolve a tile reference to its type
    pub fn resolve(&self, tile: TileRef) -> Option<&TileType> {
        match tile {
            TileRef::Catalog(id) => self.tile(id),
            TileRef::Fallback => Some(&self.fallback),
        }
    }

    /// Openness signature of a regular tile
    pub fn sides(&self, id: TileId) -> Option<Sides> {
        self.sides.get(id).copied()
    }

    /// Openness signature behind a tile reference
    pub fn sides_of(&self, tile: TileRef) -> Option<Sides> {
        match tile {
            TileRef::Catalog(id) => self.sides(id),
            TileRef::Fallback => Some(self.fallback.sides),
        }
    }

    /// Whether `b` may sit in `direction` from `a`
    pub fn compatible(&self, a: TileId, b: TileId, direction: Direction) -> bool {
        match (self.sides(a), self.sides(b)) {
            (Some(a), Some(b)) => a.matches(b, direction),
            _ => false,
        }
    }

    /// Tiles that may sit in `direction` from `origin`
    pub fn compatible_set(&self, origin: TileId, direction: Direction) -> Option<&TileBitset> {
        self.compatibility
            .get(origin)
            .and_then(|sets| sets.get(direction.index()))
    }

    /// Candidate set containing every regular tile
    pub fn full_set(&self) -> TileBitset {
        TileBitset::all(self.tiles.len())
    }

    /// Find a regular tile by name
    pub fn find(&self, name: &str) -> Option<TileId> {
        self.tiles.iter().position(|tile| tile.name == name)
    }
}
