/// Command-line interface and batch runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// PNG rendering of tile grids
pub mod image;
/// Progress bars for batch generation
pub mod progress;
/// Animated GIF playback of a run
pub mod visualization;
