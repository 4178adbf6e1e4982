//! Tests for GIF visualization capture and frame generation

#[cfg(test)]
mod tests {
    use edgetile::algorithm::events::{Placement, PlacementSink};
    use edgetile::algorithm::executor::{Solver, SolverConfig};
    use edgetile::catalog::loader::Preset;
    use edgetile::catalog::{Sides, TileCatalog, TileRef, TileType};
    use edgetile::io::error::GenerationError;
    use edgetile::io::visualization::VisualizationCapture;
    use edgetile::spatial::{Coord, Direction};
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    fn catalog() -> TileCatalog {
        TileCatalog::new(
            vec![
                TileType::new("a", Sides::from_open(&[Direction::Right])),
                TileType::new("b", Sides::from_open(&[Direction::Left])),
            ],
            TileType::new("filler", Sides::CLOSED),
        )
        .unwrap()
    }

    fn capture_pair() -> VisualizationCapture {
        let mut viz = VisualizationCapture::new(2, 1, 1);
        viz.place(&Placement {
            tile: TileRef::Catalog(0),
            coord: Coord::new(0, 0),
            step: 0,
        });
        viz.place(&Placement {
            tile: TileRef::Catalog(1),
            coord: Coord::new(1, 0),
            step: 1,
        });
        viz
    }

    fn frame_count(path: &Path) -> usize {
        let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
        decoder.into_frames().collect_frames().unwrap().len()
    }

    // Tests placement recording increments count
    // Verified by removing the sink body
    #[test]
    fn test_record_placements() {
        let mut viz = capture_pair();

        assert_eq!(viz.placement_count(), 2);
        assert_eq!(
            viz.get_placements().last().map(|p| p.coord),
            Some(Coord::new(1, 0))
        );

        viz.clear();
        assert_eq!(viz.placement_count(), 0);
    }

    // Tests error when exporting empty visualization
    // Verified by removing empty placements check
    #[test]
    fn test_export_gif_no_placements() {
        let viz = VisualizationCapture::new(4, 4, 1);
        let dir = tempfile::tempdir().unwrap();

        let result = viz.export_gif(&catalog(), &dir.path().join("empty.gif"), 50);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "visualization",
                ..
            })
        ));
    }

    // Tests one frame per placement plus the opening and closing frames
    // Verified by dropping the opening blank frame
    #[test]
    fn test_export_gif_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.gif");

        capture_pair().export_gif(&catalog(), &path, 100).unwrap();

        assert_eq!(frame_count(&path), 4);
    }

    // Tests fast playback skips frames but keeps the final state
    // Verified by disabling the skip factor
    #[test]
    fn test_export_gif_skips_fast_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fast.gif");

        capture_pair().export_gif(&catalog(), &path, 10).unwrap();

        assert_eq!(frame_count(&path), 3);
    }

    // Tests placements outside the catalog fail the export
    // Verified by ignoring draw errors during export
    #[test]
    fn test_export_gif_invalid_tile() {
        let mut viz = VisualizationCapture::new(1, 1, 0);
        viz.place(&Placement {
            tile: TileRef::Catalog(5),
            coord: Coord::new(0, 0),
            step: 0,
        });
        let dir = tempfile::tempdir().unwrap();

        let result = viz.export_gif(&catalog(), &dir.path().join("bad.gif"), 50);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidTileIndex { .. })
        ));
    }

    // Tests a full solver run exports with one frame per skip group
    // Verified by dropping the remainder frame
    #[test]
    fn test_export_gif_full_run() {
        let catalog = Preset::Pipes.catalog().unwrap();
        let mut solver = Solver::initialize(SolverConfig::new(12, 12), catalog, 9).unwrap();
        let mut viz = VisualizationCapture::new(12, 12, 1);
        solver.run_to_completion(&mut viz);
        assert_eq!(viz.placement_count(), 144);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.gif");
        viz.export_gif(solver.catalog(), &path, 10).unwrap();

        // 50ms frames covering five placements each, 144 = 28 * 5 + 4
        assert_eq!(VisualizationCapture::playback_timing(10), (50, 5));
        assert_eq!(frame_count(&path), 1 + 28 + 1 + 1);
    }

    // Tests the stretched final frame saturates for huge delays
    // Verified by replacing saturating_mul with plain multiplication
    #[test]
    fn test_export_gif_huge_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slow.gif");

        capture_pair()
            .export_gif(&catalog(), &path, u32::MAX)
            .unwrap();

        assert_eq!(frame_count(&path), 4);
    }

    // Tests playback timing raises short delays and keeps long ones
    // Verified by removing the viewer minimum
    #[test]
    fn test_playback_timing() {
        assert_eq!(VisualizationCapture::playback_timing(0), (50, 50));
        assert_eq!(VisualizationCapture::playback_timing(7), (50, 8));
        assert_eq!(VisualizationCapture::playback_timing(50), (50, 1));
        assert_eq!(VisualizationCapture::playback_timing(120), (120, 1));
    }
}
