use crate::spatial::{Coord, GridState};
use rand::Rng;

/// How the first cell of a run is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPolicy {
    /// Global minimum scan like every later selection with no local candidate
    #[default]
    FirstMinimum,
    /// Uniformly random active cell
    Random,
}

/// Choose the next cell to collapse
///
/// Looks at the uncollapsed neighbours of the last collapsed cell first and
/// returns the one with the fewest candidates. When there is no such
/// neighbour, scans the whole active set instead. Ties keep the first
/// coordinate encountered: Up, Right, Down, Left for neighbours and row-major
/// order for the active set.
pub fn choose_next(grid_state: &GridState) -> Option<Coord> {
    grid_state
        .last_collapsed
        .and_then(|last| choose_local(grid_state, last))
        .or_else(|| choose_global(grid_state))
}

/// Uncollapsed neighbour of `origin` with the fewest candidates
pub fn choose_local(grid_state: &GridState, origin: Coord) -> Option<Coord> {
    first_minimum(
        grid_state
            .neighbors(origin)
            .filter_map(|(_, coord)| grid_state.entropy(coord).map(|count| (coord, count))),
    )
}

/// Active coordinate with the globally fewest candidates
pub fn choose_global(grid_state: &GridState) -> Option<Coord> {
    first_minimum(
        grid_state
            .active
            .iter()
            .filter_map(|coord| grid_state.entropy(coord).map(|count| (coord, count))),
    )
}

/// Uniformly random active coordinate
pub fn choose_random<R: Rng + ?Sized>(grid_state: &GridState, rng: &mut R) -> Option<Coord> {
    let count = grid_state.active.len();
    if count == 0 {
        return None;
    }
    grid_state.active.nth(rng.random_range(0..count))
}

// Strict `<` keeps the first of equal counts
fn first_minimum(candidates: impl Iterator<Item = (Coord, usize)>) -> Option<Coord> {
    let mut best: Option<(Coord, usize)> = None;
    for (coord, count) in candidates {
        if best.is_none_or(|(_, best_count)| count < best_count) {
            best = Some((coord, count));
        }
    }
    best.map(|(coord, _)| coord)
}
