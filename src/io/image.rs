//! PNG rendering of tile grids
//!
//! Each tile is a `TILE_PIXELS` square glyph: a centre hub with an arm towards
//! every open side. Grid `y` grows upwards, so row 0 is drawn at the bottom.

use crate::catalog::{Sides, TileCatalog, TileRef};
use crate::io::configuration::{FALLBACK_COLOR, TILE_BACKGROUND, TILE_CONNECTION, TILE_PIXELS};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Coord, Direction, GridState};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Pixel size of a `width x height` grid with `padding` pixels between tiles
///
/// # Errors
///
/// Returns an invalid parameter error if either side doesn't fit in `u32` pixels
pub fn canvas_size(width: usize, height: usize, padding: u32) -> Result<(u32, u32)> {
    let side = |cells: usize| -> Option<u32> {
        let cells = u32::try_from(cells).ok()?;
        cells
            .checked_mul(TILE_PIXELS)?
            .checked_add(cells.saturating_sub(1).checked_mul(padding)?)
    };

    match (side(width), side(height)) {
        (Some(px_width), Some(px_height)) => Ok((px_width, px_height)),
        _ => Err(invalid_parameter(
            "padding",
            &padding,
            &format!("a {width}x{height} grid doesn't fit in a u32 pixel canvas"),
        )),
    }
}

/// Top-left pixel of the tile at `coord`
///
/// Saturates instead of wrapping; callers draw with checked pixel access.
pub const fn tile_origin(coord: Coord, grid_height: usize, padding: u32) -> (u32, u32) {
    let stride = TILE_PIXELS.saturating_add(padding);
    let row_from_top = grid_height.saturating_sub(coord.y.saturating_add(1)) as u32;
    (
        (coord.x as u32).saturating_mul(stride),
        row_from_top.saturating_mul(stride),
    )
}

// Hub spans the middle third of the glyph
const fn hub_range() -> (u32, u32) {
    let third = TILE_PIXELS / 3;
    (third, TILE_PIXELS - third)
}

fn glyph_pixel(sides: Sides, fallback: bool, px: u32, py: u32) -> [u8; 4] {
    let (lo, hi) = hub_range();
    let in_band_x = px >= lo && px < hi;
    let in_band_y = py >= lo && py < hi;

    let connected = (in_band_x && in_band_y)
        || (in_band_x && py < lo && sides.is_open(Direction::Up))
        || (in_band_x && py >= hi && sides.is_open(Direction::Down))
        || (in_band_y && px >= hi && sides.is_open(Direction::Right))
        || (in_band_y && px < lo && sides.is_open(Direction::Left));

    match (connected, fallback) {
        (true, _) => TILE_CONNECTION,
        (false, true) => FALLBACK_COLOR,
        (false, false) => TILE_BACKGROUND,
    }
}

/// Draw one tile glyph into `img`
///
/// # Errors
///
/// Returns an error if `tile` doesn't belong to `catalog`
pub fn draw_tile(
    img: &mut RgbaImage,
    catalog: &TileCatalog,
    tile: TileRef,
    coord: Coord,
    grid_height: usize,
    padding: u32,
) -> Result<()> {
    let sides = catalog
        .sides_of(tile)
        .ok_or_else(|| GenerationError::InvalidTileIndex {
            index: match tile {
                TileRef::Catalog(id) => id,
                TileRef::Fallback => catalog.len(),
            },
            max_tiles: catalog.len(),
        })?;
    let fallback = tile == TileRef::Fallback;
    let (ox, oy) = tile_origin(coord, grid_height, padding);

    for py in 0..TILE_PIXELS {
        for px in 0..TILE_PIXELS {
            let (Some(x), Some(y)) = (ox.checked_add(px), oy.checked_add(py)) else {
                continue;
            };
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(glyph_pixel(sides, fallback, px, py));
            }
        }
    }
    Ok(())
}

/// Render every collapsed cell; uncollapsed cells and padding stay transparent
///
/// # Errors
///
/// Returns an error if the canvas is too large or a committed tile doesn't
/// belong to `catalog`
pub fn render_grid(
    grid_state: &GridState,
    catalog: &TileCatalog,
    padding: u32,
) -> Result<RgbaImage> {
    let (width, height) = canvas_size(grid_state.width(), grid_state.height(), padding)?;
    let mut img = RgbaImage::new(width, height);

    for y in 0..grid_state.height() {
        for x in 0..grid_state.width() {
            let coord = Coord::new(x, y);
            if let Some(tile) = grid_state.tile_at(coord) {
                draw_tile(&mut img, catalog, tile, coord, grid_state.height(), padding)?;
            }
        }
    }

    Ok(img)
}

/// Export the grid state as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - A committed tile is out of bounds for the catalog
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid_state: &GridState,
    catalog: &TileCatalog,
    padding: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid(grid_state, catalog, padding)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
