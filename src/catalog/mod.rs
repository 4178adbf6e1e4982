//! Tile catalog: tile types, the compatibility rule and catalog sources

/// Built-in presets and the text catalog format
pub mod loader;
/// Tile types, openness signatures and precomputed compatibility sets
pub mod tiles;

pub use tiles::{Sides, TileCatalog, TileId, TileRef, TileType};
