//! Tests for placement sinks

#[cfg(test)]
mod tests {
    use edgetile::algorithm::events::{
        Contradiction, ContradictionCause, EventLog, Placement, PlacementSink,
    };
    use edgetile::catalog::TileRef;
    use edgetile::spatial::Coord;

    fn placement(tile: TileRef, x: usize, step: usize) -> Placement {
        Placement {
            tile,
            coord: Coord::new(x, 0),
            step,
        }
    }

    // Tests the event log keeps emission order
    // Verified by inserting new events at the front
    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.place(&placement(TileRef::Catalog(3), 0, 0));
        log.contradiction(&Contradiction {
            coord: Coord::new(1, 0),
            cause: ContradictionCause::Selected,
        });
        log.place(&placement(TileRef::Fallback, 1, 1));

        let steps: Vec<usize> = log.placements.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 1]);
        assert_eq!(log.contradictions.len(), 1);
    }

    // Tests fallback placements are filtered out of the log
    // Verified by returning every placement from the filter
    #[test]
    fn test_fallback_placements() {
        let mut log = EventLog::new();
        log.place(&placement(TileRef::Catalog(0), 0, 0));
        log.place(&placement(TileRef::Fallback, 1, 1));
        log.place(&placement(TileRef::Catalog(1), 2, 2));

        let fallbacks: Vec<Coord> = log.fallback_placements().map(|p| p.coord).collect();
        assert_eq!(fallbacks, vec![Coord::new(1, 0)]);
    }

    // Tests a vector sink ignores contradictions
    // Verified by recording contradictions as placements
    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<Placement> = Vec::new();
        sink.place(&placement(TileRef::Catalog(0), 0, 0));
        sink.contradiction(&Contradiction {
            coord: Coord::new(0, 0),
            cause: ContradictionCause::Propagated {
                origin: Coord::new(1, 0),
            },
        });

        assert_eq!(sink.len(), 1);
    }

    // Tests forwarding through a mutable reference
    // Verified by making the reference impl a no-op
    #[test]
    fn test_forwarding_through_reference() {
        fn emit<S: PlacementSink>(mut sink: S) {
            sink.place(&placement(TileRef::Catalog(2), 4, 0));
        }

        let mut log = EventLog::new();
        emit(&mut log);
        assert_eq!(log.placements.first().map(|p| p.tile), Some(TileRef::Catalog(2)));
    }
}
