//! Tests for PNG rendering and export

#[cfg(test)]
mod tests {
    use edgetile::catalog::{Sides, TileCatalog, TileRef, TileType};
    use edgetile::io::configuration::{
        FALLBACK_COLOR, TILE_BACKGROUND, TILE_CONNECTION, TILE_PIXELS,
    };
    use edgetile::io::error::GenerationError;
    use edgetile::io::image::{canvas_size, draw_tile, export_grid_as_png, render_grid, tile_origin};
    use edgetile::spatial::{Coord, Direction, GridState};
    use image::{Rgba, RgbaImage};

    fn catalog() -> TileCatalog {
        TileCatalog::new(
            vec![TileType::new("up", Sides::from_open(&[Direction::Up]))],
            TileType::new("filler", Sides::CLOSED),
        )
        .unwrap()
    }

    // Tests canvas size accounts for padding between tiles only
    // Verified by adding padding after the last tile
    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(1, 1, 4).unwrap(), (TILE_PIXELS, TILE_PIXELS));
        assert_eq!(
            canvas_size(3, 2, 1).unwrap(),
            (3 * TILE_PIXELS + 2, 2 * TILE_PIXELS + 1)
        );
    }

    // Tests canvases beyond u32 pixels are rejected instead of wrapping
    // Verified by replacing checked arithmetic with plain multiplication
    #[test]
    fn test_canvas_size_overflow() {
        let result = canvas_size(10_000, 2, 1_000_000);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "padding",
                ..
            })
        ));

        assert!(canvas_size(usize::MAX, 1, 0).is_err());
        assert!(canvas_size(1, 2, u32::MAX).is_err());
    }

    // Tests row zero is drawn at the bottom
    // Verified by removing the vertical flip
    #[test]
    fn test_tile_origin_flips_y() {
        let stride = TILE_PIXELS + 1;
        assert_eq!(tile_origin(Coord::new(0, 0), 2, 1), (0, stride));
        assert_eq!(tile_origin(Coord::new(1, 1), 2, 1), (stride, 0));
    }

    // Tests huge strides saturate instead of panicking
    // Verified by replacing saturating_mul with plain multiplication
    #[test]
    fn test_tile_origin_saturates() {
        assert_eq!(
            tile_origin(Coord::new(10_000, 0), 1, 1_000_000),
            (u32::MAX, 0)
        );
        assert_eq!(tile_origin(Coord::new(0, 0), 1, u32::MAX), (0, 0));
    }

    // Tests open sides are drawn as arms from the hub
    // Verified by drawing arms for closed sides
    #[test]
    fn test_draw_tile_arms() {
        let catalog = catalog();
        let mut img = RgbaImage::new(TILE_PIXELS, TILE_PIXELS);
        draw_tile(&mut img, &catalog, TileRef::Catalog(0), Coord::new(0, 0), 1, 0).unwrap();

        let middle = TILE_PIXELS / 2;
        assert_eq!(*img.get_pixel(middle, middle), Rgba(TILE_CONNECTION));
        assert_eq!(*img.get_pixel(middle, 0), Rgba(TILE_CONNECTION));
        assert_eq!(*img.get_pixel(middle, TILE_PIXELS - 1), Rgba(TILE_BACKGROUND));
        assert_eq!(*img.get_pixel(0, 0), Rgba(TILE_BACKGROUND));
    }

    // Tests the fallback tile has its own background
    // Verified by drawing the fallback with the tile background
    #[test]
    fn test_draw_fallback() {
        let catalog = catalog();
        let mut img = RgbaImage::new(TILE_PIXELS, TILE_PIXELS);
        draw_tile(&mut img, &catalog, TileRef::Fallback, Coord::new(0, 0), 1, 0).unwrap();

        assert_eq!(*img.get_pixel(0, 0), Rgba(FALLBACK_COLOR));
        assert_eq!(*img.get_pixel(TILE_PIXELS / 2, 0), Rgba(FALLBACK_COLOR));
    }

    // Tests unknown tiles are rejected
    // Verified by disabling bounds check
    #[test]
    fn test_draw_invalid_tile() {
        let catalog = catalog();
        let mut img = RgbaImage::new(TILE_PIXELS, TILE_PIXELS);
        let result = draw_tile(&mut img, &catalog, TileRef::Catalog(3), Coord::new(0, 0), 1, 0);

        assert!(matches!(
            result,
            Err(GenerationError::InvalidTileIndex {
                index: 3,
                max_tiles: 1
            })
        ));
    }

    // Tests uncollapsed cells stay transparent
    // Verified by filling uncollapsed cells with the background
    #[test]
    fn test_render_partial_grid() {
        let catalog = catalog();
        let mut grid_state = GridState::new(2, 1, catalog.len());
        grid_state.commit(Coord::new(0, 0), TileRef::Catalog(0));

        let img = render_grid(&grid_state, &catalog, 1).unwrap();

        assert_eq!(img.dimensions(), canvas_size(2, 1, 1).unwrap());
        assert_eq!(*img.get_pixel(0, 0), Rgba(TILE_BACKGROUND));
        assert_eq!(*img.get_pixel(TILE_PIXELS, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*img.get_pixel(TILE_PIXELS + 1, 0), Rgba([0, 0, 0, 0]));
    }

    // Tests PNG file creation in a missing directory
    // Verified by disabling file save operation
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let catalog = catalog();
        let mut grid_state = GridState::new(3, 2, catalog.len());
        grid_state.commit(Coord::new(2, 1), TileRef::Fallback);

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("renders").join("grid.png");
        export_grid_as_png(&grid_state, &catalog, 1, &output_path).unwrap();

        let saved = image::open(&output_path).unwrap();
        assert_eq!(
            (saved.width(), saved.height()),
            canvas_size(3, 2, 1).unwrap()
        );
    }
}
