use crate::{
    algorithm::collapse::{CollapseOutcome, collapse},
    algorithm::events::PlacementSink,
    algorithm::selection::{StartPolicy, choose_next, choose_random},
    catalog::{TileCatalog, TileRef},
    io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION},
    io::error::{Result, invalid_parameter},
    spatial::{Coord, GridState},
};
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Solver parameters fixed for the lifetime of a solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// How the first cell of each run is chosen
    pub start: StartPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            start: StartPolicy::default(),
        }
    }
}

impl SolverConfig {
    /// Config for a `width x height` grid with the default start policy
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check both dimensions lie in `1..=MAX_GRID_DIMENSION`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the offending dimension
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("exceeds maximum of {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Greedy edge-matching wave function collapse over a fixed grid
///
/// Owns the catalog, the grid state of the current run and the random
/// source. Each step selects a cell, collapses it and propagates to its
/// neighbours; contradictions are resolved with the fallback tile and never
/// undone.
pub struct Solver<R: Rng = StdRng> {
    config: SolverConfig,
    catalog: TileCatalog,
    grid_state: GridState,
    rng: R,
    /// Completed runs since construction
    run: usize,
}

impl Solver<StdRng> {
    /// Create a solver over a seeded `StdRng`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large
    pub fn initialize(config: SolverConfig, catalog: TileCatalog, seed: u64) -> Result<Self> {
        Self::with_rng(config, catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver over any random source
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large
    pub fn with_rng(config: SolverConfig, catalog: TileCatalog, rng: R) -> Result<Self> {
        config.validate()?;
        let grid_state = GridState::new(config.width, config.height, catalog.len());
        debug!(
            "Initialized {}x{} grid over {} tiles",
            config.width,
            config.height,
            catalog.len()
        );

        Ok(Self {
            config,
            catalog,
            grid_state,
            rng,
            run: 0,
        })
    }

    /// Run one select, collapse and propagate cycle
    ///
    /// Returns whether uncollapsed cells remain afterwards. Does nothing and
    /// returns false once the grid is complete.
    pub fn step_once<S: PlacementSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let Some(coord) = self.choose_next() else {
            return false;
        };

        let outcome = collapse(
            &mut self.grid_state,
            &self.catalog,
            coord,
            &mut self.rng,
            sink,
        );
        debug!(
            "Step {}: {coord} -> {outcome:?}, {} cells left",
            self.grid_state.collapse_count,
            self.grid_state.active.len()
        );

        if self.grid_state.is_complete() {
            info!(
                "Run {} complete: {} cells, {} fallbacks",
                self.run,
                self.grid_state.cell_count(),
                self.grid_state.fallback_count
            );
            self.run += 1;
        }

        !self.grid_state.is_complete()
    }

    /// Step until every cell has collapsed
    pub fn run_to_completion<S: PlacementSink + ?Sized>(&mut self, sink: &mut S) {
        while self.step_once(sink) {}
    }

    /// Discard the current run and start over with a fresh grid
    ///
    /// The random source continues rather than restarting.
    pub fn reset(&mut self) {
        self.grid_state = GridState::new(self.config.width, self.config.height, self.catalog.len());
    }

    /// Select the next cell without collapsing it
    pub fn choose_next(&mut self) -> Option<Coord> {
        if self.config.start == StartPolicy::Random && self.grid_state.collapse_count == 0 {
            return choose_random(&self.grid_state, &mut self.rng);
        }
        choose_next(&self.grid_state)
    }

    /// Collapse a specific cell, bypassing selection
    pub fn collapse_at<S: PlacementSink + ?Sized>(
        &mut self,
        coord: Coord,
        sink: &mut S,
    ) -> CollapseOutcome {
        collapse(
            &mut self.grid_state,
            &self.catalog,
            coord,
            &mut self.rng,
            sink,
        )
    }

    /// Current grid state
    pub const fn grid_state(&self) -> &GridState {
        &self.grid_state
    }

    /// The tile catalog
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Solver configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Tile committed at `coord`
    pub fn tile_at(&self, coord: Coord) -> Option<TileRef> {
        self.grid_state.tile_at(coord)
    }

    /// Last non-fallback collapse of the current run
    pub const fn last_collapsed(&self) -> Option<Coord> {
        self.grid_state.last_collapsed
    }

    /// Whether every cell has collapsed
    pub const fn is_complete(&self) -> bool {
        self.grid_state.is_complete()
    }

    /// Committed tiles in row-major order, `None` for uncollapsed cells
    pub fn assignment(&self) -> Vec<Option<TileRef>> {
        self.grid_state.cells.iter().map(|cell| cell.tile).collect()
    }
}
