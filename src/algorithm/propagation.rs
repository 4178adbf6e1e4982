use crate::{
    algorithm::collapse::resolve_contradiction,
    algorithm::events::{ContradictionCause, PlacementSink},
    catalog::{TileCatalog, TileId},
    spatial::{Coord, GridState},
};
use log::trace;

/// What a single propagation pass changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationOutcome {
    /// Uncollapsed neighbours that were examined
    pub neighbors_visited: usize,
    /// Candidates removed across all neighbours
    pub candidates_removed: usize,
    /// Neighbours resolved with the fallback tile
    pub contradictions: usize,
}

/// Prune the four neighbours of a freshly collapsed cell
///
/// Every uncollapsed in-bounds neighbour keeps only the tiles whose facing
/// side matches `tile`. A neighbour left without candidates is committed to
/// the fallback tile immediately. Only distance-1 cells are touched; nothing
/// is re-propagated from the pruned neighbours.
pub fn propagate<S: PlacementSink + ?Sized>(
    grid_state: &mut GridState,
    catalog: &TileCatalog,
    origin: Coord,
    tile: TileId,
    sink: &mut S,
) -> PropagationOutcome {
    let mut outcome = PropagationOutcome::default();

    for (direction, neighbor) in grid_state.neighbors(origin) {
        let Some(allowed) = catalog.compatible_set(tile, direction) else {
            continue;
        };

        let emptied = match grid_state.cell_mut(neighbor) {
            Some(cell) if !cell.collapsed => {
                let before = cell.candidates.count();
                cell.candidates.intersect_with(allowed);
                let after = cell.candidates.count();

                outcome.neighbors_visited += 1;
                outcome.candidates_removed += before - after;
                trace!("{neighbor} pruned from {before} to {after} candidates");

                after == 0
            }
            _ => false,
        };

        if emptied
            && resolve_contradiction(
                grid_state,
                catalog,
                neighbor,
                ContradictionCause::Propagated { origin },
                sink,
            )
        {
            outcome.contradictions += 1;
        }
    }

    outcome
}
