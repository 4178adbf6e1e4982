//! Multi-run progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch of generation runs
///
/// Shows one bar per run for small batches and adds a single batch bar once
/// the run count exceeds what fits on screen
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    run_bars: Vec<ProgressBar>,
    run_count: usize,
    /// Stores (`label`, `collapsed`, `cells`) for rolling window display
    run_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            run_bars: Vec::new(),
            run_count: 0,
            run_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on run count
    pub fn initialize(&mut self, run_count: usize) {
        self.run_count = run_count;

        // Switch to batch mode for large run sets to avoid terminal spam
        if run_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(run_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = run_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.run_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of runs the manager was initialized for
    pub const fn run_count(&self) -> usize {
        self.run_count
    }

    /// Configure a progress bar for a new run
    pub fn start_run(&mut self, index: usize, label: &str, cells: usize) {
        if index >= self.run_states.len() {
            self.run_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.run_states.get_mut(index) {
            *state = (label.to_string(), 0, cells);
        }
        self.update_bars();
    }

    /// Report the number of collapsed cells of a run
    pub fn update_collapsed(&mut self, index: usize, collapsed: usize) {
        if let Some(state) = self.run_states.get_mut(index) {
            state.1 = collapsed;
        }
        self.update_bars();
    }

    /// Mark a run as completed and update batch progress
    pub fn complete_run(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.run_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All runs generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N started runs
    fn update_bars(&self) {
        let active_runs: Vec<_> = self
            .run_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active_runs
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_runs = active_runs.get(start_idx..).unwrap_or(&[]);

        for (bar, (label, collapsed, cells)) in self.run_bars.iter().zip(visible_runs) {
            bar.set_length(*cells as u64);
            bar.set_position(*collapsed as u64);
            let max_width = cells.to_string().len();
            bar.set_message(format!("{collapsed:>max_width$}/{cells}"));
            bar.set_prefix(label.clone());
        }

        // Clear any unused bars
        for bar in self.run_bars.iter().skip(visible_runs.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
