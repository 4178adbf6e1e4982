//! Command-line interface for generating tile grids to PNG files

use crate::algorithm::events::{Contradiction, EventLog, Placement, PlacementSink};
use crate::algorithm::executor::{Solver, SolverConfig};
use crate::algorithm::selection::StartPolicy;
use crate::analysis::report::GenerationReport;
use crate::catalog::TileCatalog;
use crate::catalog::loader::{Preset, load_catalog};
use crate::io::configuration::{
    DEFAULT_COLLAPSE_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_LOG_SPEC, DEFAULT_RUN_COUNT, DEFAULT_SEED,
    DEFAULT_TILE_PADDING, DEFAULT_WIDTH, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{canvas_size, export_grid_as_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "edgetile")]
#[command(
    author,
    version,
    about = "Fill tile grids with greedy edge-matching wave function collapse"
)]
/// Command-line arguments for the grid generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Built-in tile set used when no catalog file is given
    #[arg(long, value_enum, default_value_t = Preset::default())]
    pub preset: Preset,

    /// Catalog file with one `<name> <sides>` line per tile
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Number of grids to generate, with consecutive seeds
    #[arg(short = 'k', long, default_value_t = DEFAULT_RUN_COUNT)]
    pub count: usize,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Delay between collapses in the visualization, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_COLLAPSE_DELAY_MS)]
    pub delay: u32,

    /// Gap between tiles in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PADDING)]
    pub padding: u32,

    /// Collapse a random cell first instead of the first minimum
    #[arg(short, long)]
    pub random_start: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log specification, e.g. "info" or "warn, edgetile::algorithm = debug"
    #[arg(short, long, default_value = DEFAULT_LOG_SPEC)]
    pub log: String,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration described by the arguments
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            width: self.width,
            height: self.height,
            start: if self.random_start {
                StartPolicy::Random
            } else {
                StartPolicy::FirstMinimum
            },
        }
    }

    /// Load the catalog file, or build the preset when none is given
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file can't be read or parsed
    pub fn load_catalog(&self) -> Result<TileCatalog> {
        self.catalog
            .as_deref()
            .map_or_else(|| self.preset.catalog(), load_catalog)
    }
}

/// Forwards solver output to the GIF capture when one is active
struct RunSink<'a> {
    events: EventLog,
    visualization: Option<&'a mut VisualizationCapture>,
}

impl PlacementSink for RunSink<'_> {
    fn place(&mut self, placement: &Placement) {
        self.events.place(placement);
        if let Some(visualization) = self.visualization.as_deref_mut() {
            visualization.place(placement);
        }
    }

    fn contradiction(&mut self, contradiction: &Contradiction) {
        self.events.contradiction(contradiction);
    }
}

/// Orchestrates a batch of generation runs with progress tracking
pub struct GenerationRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GenerationRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested grid
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, catalog loading, generation
    /// or export fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter("count", &self.cli.count, &"must be positive"));
        }
        self.cli.solver_config().validate()?;
        canvas_size(self.cli.width, self.cli.height, self.cli.padding)?;
        let catalog = self.cli.load_catalog()?;

        let runs: Vec<(usize, PathBuf)> = (0..self.cli.count)
            .map(|index| (index, self.output_path(index)))
            .filter(|(_, path)| self.should_generate(path))
            .collect();

        if runs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(runs.len());
        }

        for (slot, (index, path)) in runs.iter().enumerate() {
            self.generate(&catalog, slot, *index, path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_generate(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }
        info!("Skipping {} (output exists)", output_path.display());
        false
    }

    fn generate(
        &mut self,
        catalog: &TileCatalog,
        slot: usize,
        index: usize,
        output_path: &Path,
    ) -> Result<()> {
        let seed = self.cli.seed.wrapping_add(index as u64);
        let mut solver = Solver::initialize(self.cli.solver_config(), catalog.clone(), seed)?;
        let cells = solver.grid_state().cell_count();

        if let Some(ref mut pm) = self.progress_manager {
            let label = output_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            pm.start_run(slot, &label, cells);
        }

        let mut visualization = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(self.cli.width, self.cli.height, self.cli.padding));
        let mut sink = RunSink {
            events: EventLog::new(),
            visualization: visualization.as_mut(),
        };

        while solver.step_once(&mut sink) {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_collapsed(slot, solver.grid_state().collapse_count);
            }
        }
        let contradictions = sink.events.contradictions.len();

        export_grid_as_png(solver.grid_state(), catalog, self.cli.padding, output_path)?;

        if let Some(ref capture) = visualization {
            capture.export_gif(catalog, &Self::visualization_path(output_path), self.cli.delay)?;
        }

        let report = GenerationReport::from_state(solver.grid_state(), catalog);
        info!(
            "{} (seed {seed}): {report}, {contradictions} contradictions",
            output_path.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_run(slot);
        }

        Ok(())
    }

    /// Output path of run `index`; numbered only when generating several grids
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }
        Self::with_stem_suffix(&self.cli.output, &format!("_{index}"), "png")
    }

    /// GIF path written next to a PNG output
    pub fn visualization_path(output_path: &Path) -> PathBuf {
        Self::with_stem_suffix(output_path, VISUALIZATION_SUFFIX, "gif")
    }

    fn with_stem_suffix(path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
