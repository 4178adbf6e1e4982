use crate::{
    algorithm::events::{Contradiction, ContradictionCause, Placement, PlacementSink},
    algorithm::propagation::propagate,
    catalog::{TileCatalog, TileId, TileRef},
    spatial::{Coord, GridState},
};
use log::warn;
use rand::Rng;

/// Result of collapsing one selected cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// A catalog tile was chosen and propagated
    Collapsed(TileId),
    /// The cell had no candidates and received the fallback tile
    Fallback,
    /// The coordinate was out of bounds or already collapsed
    Skipped,
}

/// Collapse the cell at `coord`
///
/// Picks one remaining candidate uniformly at random, commits it, records
/// `coord` as the last collapsed cell, emits the placement and propagates to
/// the neighbours. A cell with no candidates gets the fallback tile instead,
/// without propagation and without moving the last-collapsed hint.
pub fn collapse<R, S>(
    grid_state: &mut GridState,
    catalog: &TileCatalog,
    coord: Coord,
    rng: &mut R,
    sink: &mut S,
) -> CollapseOutcome
where
    R: Rng + ?Sized,
    S: PlacementSink + ?Sized,
{
    let Some(cell) = grid_state.cell(coord).filter(|cell| !cell.collapsed) else {
        return CollapseOutcome::Skipped;
    };

    let count = cell.candidates.count();
    if count == 0 {
        return if resolve_contradiction(
            grid_state,
            catalog,
            coord,
            ContradictionCause::Selected,
            sink,
        ) {
            CollapseOutcome::Fallback
        } else {
            CollapseOutcome::Skipped
        };
    }

    let Some(tile) = cell.candidates.nth(rng.random_range(0..count)) else {
        return CollapseOutcome::Skipped;
    };
    let Some(step) = grid_state.commit(coord, TileRef::Catalog(tile)) else {
        return CollapseOutcome::Skipped;
    };
    grid_state.last_collapsed = Some(coord);

    sink.place(&Placement {
        tile: TileRef::Catalog(tile),
        coord,
        step,
    });
    propagate(grid_state, catalog, coord, tile, sink);

    CollapseOutcome::Collapsed(tile)
}

/// Commit the fallback tile to an uncollapsed cell
///
/// Emits a warning, the contradiction event and the placement. Returns false
/// if the cell was already collapsed.
pub fn resolve_contradiction<S: PlacementSink + ?Sized>(
    grid_state: &mut GridState,
    catalog: &TileCatalog,
    coord: Coord,
    cause: ContradictionCause,
    sink: &mut S,
) -> bool {
    let Some(step) = grid_state.commit(coord, TileRef::Fallback) else {
        return false;
    };

    match cause {
        ContradictionCause::Selected => warn!(
            "No candidates left at {coord}, using fallback tile '{}'",
            catalog.fallback().name
        ),
        ContradictionCause::Propagated { origin } => warn!(
            "No candidates left at {coord} after collapsing {origin}, using fallback tile '{}'",
            catalog.fallback().name
        ),
    }

    sink.contradiction(&Contradiction { coord, cause });
    sink.place(&Placement {
        tile: TileRef::Fallback,
        coord,
        step,
    });
    true
}
