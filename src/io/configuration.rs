//! Generation constants and runtime configuration defaults

// Grid defaults match a small hand-viewable board
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 10;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of grids generated per invocation
pub const DEFAULT_RUN_COUNT: usize = 1;

/// Name given to the fallback tile when a catalog doesn't declare one
pub const DEFAULT_FALLBACK_NAME: &str = "filler";

// Rendering settings
/// Edge length of a rendered tile glyph in pixels
pub const TILE_PIXELS: u32 = 9;
/// Default gap between rendered tiles in pixels
pub const DEFAULT_TILE_PADDING: u32 = 1;
/// Background colour of a tile glyph
pub const TILE_BACKGROUND: [u8; 4] = [32, 34, 40, 255];
/// Colour of open connections in a tile glyph
pub const TILE_CONNECTION: [u8; 4] = [220, 220, 200, 255];
/// Fill colour used for fallback tiles
pub const FALLBACK_COLOR: [u8; 4] = [200, 40, 120, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Output settings
/// Suffix added to visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between collapses in paced playback
pub const DEFAULT_COLLAPSE_DELAY_MS: u32 = 100;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Default log specification for the command-line tool
pub const DEFAULT_LOG_SPEC: &str = "warn";
