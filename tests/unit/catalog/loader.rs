//! Tests for catalog presets and the text format

#[cfg(test)]
mod tests {
    use edgetile::catalog::loader::{Preset, load_catalog, parse_catalog, parse_sides};
    use edgetile::catalog::{Sides, TileRef};
    use edgetile::io::error::GenerationError;
    use edgetile::spatial::Direction;
    use std::collections::HashSet;

    // Tests the pipes preset covers every signature once
    // Verified by dropping the fully open signature
    #[test]
    fn test_pipes_preset() {
        let catalog = Preset::Pipes.catalog().expect("preset builds");
        let signatures: HashSet<Sides> = (0..catalog.len())
            .filter_map(|id| catalog.sides(id))
            .collect();

        assert_eq!(catalog.len(), 16);
        assert_eq!(signatures.len(), 16);
        assert!(catalog.find("pipe_blank").is_some());
        assert!(catalog.find("pipe_URDL").is_some());
    }

    // Tests the paths preset has no dead ends
    // Verified by adding a one-sided tile to the preset
    #[test]
    fn test_paths_preset() {
        let catalog = Preset::Paths.catalog().expect("preset builds");

        assert_eq!(catalog.len(), 11);
        assert!(catalog.tiles().iter().all(|tile| tile.sides.open_count() >= 2));
        assert_eq!(Preset::default(), Preset::Paths);
        assert_eq!(catalog.fallback().name, "filler");
    }

    // Tests sides tokens are case-insensitive
    // Verified by matching only uppercase letters
    #[test]
    fn test_parse_sides() {
        let sides = parse_sides("uR", 1).expect("valid token");
        assert_eq!(sides, Sides::from_open(&[Direction::Up, Direction::Right]));
        assert_eq!(parse_sides("-", 1).expect("valid token"), Sides::CLOSED);
    }

    // Tests malformed sides tokens report their line
    // Verified by accepting unknown letters
    #[test]
    fn test_parse_sides_errors() {
        assert!(matches!(
            parse_sides("UX", 4),
            Err(GenerationError::CatalogParse { line: 4, .. })
        ));
        assert!(matches!(
            parse_sides("UU", 2),
            Err(GenerationError::CatalogParse { line: 2, .. })
        ));
    }

    // Tests comments, blank lines and the fallback declaration
    // Verified by treating comments as tiles
    #[test]
    fn test_parse_catalog() {
        let text = "\
# a tiny set
straight  UD
corner    UR   # trailing comment

fallback  hole -
";
        let catalog = parse_catalog(text).expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("corner"), Some(1));
        assert_eq!(catalog.fallback().name, "hole");
        assert_eq!(catalog.sides_of(TileRef::Fallback), Some(Sides::CLOSED));
    }

    // Tests the default fallback when none is declared
    // Verified by requiring a fallback declaration
    #[test]
    fn test_parse_catalog_default_fallback() {
        let catalog = parse_catalog("only URDL").expect("valid catalog");
        assert_eq!(catalog.fallback().name, "filler");
    }

    // Tests parse errors carry one-based line numbers
    // Verified by reporting zero-based line numbers
    #[test]
    fn test_parse_catalog_errors() {
        assert!(matches!(
            parse_catalog("a U\nb U D\n"),
            Err(GenerationError::CatalogParse { line: 2, .. })
        ));
        assert!(matches!(
            parse_catalog("a U\nfallback x -\nfallback y -\n"),
            Err(GenerationError::CatalogParse { line: 3, .. })
        ));
        assert!(matches!(
            parse_catalog("# nothing here\n"),
            Err(GenerationError::EmptyCatalog)
        ));
    }

    // Tests loading from disk and reporting missing files
    // Verified by ignoring the read error
    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tiles.txt");
        std::fs::write(&path, "a R\nb L\n").expect("write catalog");

        let catalog = load_catalog(&path).expect("valid catalog");
        assert_eq!(catalog.len(), 2);

        assert!(matches!(
            load_catalog(&dir.path().join("missing.txt")),
            Err(GenerationError::FileSystem { .. })
        ));
    }
}
