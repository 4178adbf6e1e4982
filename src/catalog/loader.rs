//! Built-in catalog presets and the plain-text catalog format
//!
//! ```text
//! # name      sides
//! straight_v  UD
//! corner_ur   UR
//! cross       URDL
//! fallback filler -
//! ```

use crate::catalog::tiles::{Sides, TileCatalog, TileType};
use crate::io::configuration::DEFAULT_FALLBACK_NAME;
use crate::io::error::{GenerationError, Result, parse_error};
use crate::spatial::direction::Direction;
use std::path::Path;

/// Keyword introducing the fallback tile line
const FALLBACK_KEYWORD: &str = "fallback";

/// Built-in tile sets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Every one of the 16 openness signatures, which can never contradict
    Pipes,
    /// Straights, corners, T-junctions and a cross with no dead ends
    #[default]
    Paths,
}

impl Preset {
    /// Build the preset catalog
    ///
    /// # Errors
    ///
    /// Propagates catalog construction errors
    pub fn catalog(self) -> Result<TileCatalog> {
        let tiles: Vec<TileType> = match self {
            Self::Pipes => (0..16u8)
                .map(|mask| {
                    let sides = Sides::new(
                        mask & 1 != 0,
                        mask & 2 != 0,
                        mask & 4 != 0,
                        mask & 8 != 0,
                    );
                    let name = if mask == 0 {
                        "pipe_blank".to_string()
                    } else {
                        format!("pipe_{sides}")
                    };
                    TileType::new(name, sides)
                })
                .collect(),
            Self::Paths => {
                use Direction::{Down, Left, Right, Up};
                [
                    ("straight_v", &[Up, Down][..]),
                    ("straight_h", &[Right, Left][..]),
                    ("corner_ur", &[Up, Right][..]),
                    ("corner_rd", &[Right, Down][..]),
                    ("corner_dl", &[Down, Left][..]),
                    ("corner_lu", &[Left, Up][..]),
                    ("tee_u", &[Up, Right, Left][..]),
                    ("tee_r", &[Up, Right, Down][..]),
                    ("tee_d", &[Right, Down, Left][..]),
                    ("tee_l", &[Up, Down, Left][..]),
                    ("cross", &[Up, Right, Down, Left][..]),
                ]
                .into_iter()
                .map(|(name, open)| TileType::new(name, Sides::from_open(open)))
                .collect()
            }
        };
        TileCatalog::new(tiles, default_fallback())
    }
}

fn default_fallback() -> TileType {
    TileType::new(DEFAULT_FALLBACK_NAME, Sides::CLOSED)
}

/// Parse a sides token such as `URD`, `lr` or `-`
///
/// # Errors
///
/// Returns a parse error naming `line` for unknown letters or repeated sides
pub fn parse_sides(token: &str, line: usize) -> Result<Sides> {
    if token == "-" {
        return Ok(Sides::CLOSED);
    }

    let mut sides = Sides::CLOSED;
    for letter in token.chars() {
        let direction = Direction::ALL
            .into_iter()
            .find(|direction| direction.letter() == letter.to_ascii_uppercase())
            .ok_or_else(|| parse_error(line, &format!("unknown side '{letter}' in '{token}'")))?;
        if sides.is_open(direction) {
            return Err(parse_error(line, &format!("side '{letter}' repeated in '{token}'")));
        }
        sides.set(direction, true);
    }
    Ok(sides)
}

/// Parse catalog text
///
/// # Errors
///
/// Returns an error if:
/// - A line doesn't have the `<name> <sides>` shape
/// - A sides token is malformed
/// - More than one fallback line is present
/// - The resulting catalog is empty or has duplicate names
pub fn parse_catalog(text: &str) -> Result<TileCatalog> {
    let mut tiles = Vec::new();
    let mut fallback: Option<TileType> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = content.split_whitespace().collect();
        match tokens.as_slice() {
            [FALLBACK_KEYWORD, name, sides] => {
                if fallback.is_some() {
                    return Err(parse_error(line_number, &"fallback tile declared twice"));
                }
                fallback = Some(TileType::new(*name, parse_sides(sides, line_number)?));
            }
            [name, sides] => {
                tiles.push(TileType::new(*name, parse_sides(sides, line_number)?));
            }
            _ => {
                return Err(parse_error(
                    line_number,
                    &format!("expected '<name> <sides>', found '{content}'"),
                ));
            }
        }
    }

    TileCatalog::new(tiles, fallback.unwrap_or_else(default_fallback))
}

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns an error if the file can't be read or its content is invalid
pub fn load_catalog(path: &Path) -> Result<TileCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source: e,
    })?;
    parse_catalog(&text)
}
