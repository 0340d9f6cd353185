// config.rs - compile-time settings for the board, the fade trail and playback

/// Pixels per cell on screen.
pub const CELL: f32 = 10.0;

/// Board dimensions, fixed for the lifetime of a session.
pub const GRID_ROWS: usize = 60;
pub const GRID_COLS: usize = 96;

/// Fraction of cells seeded alive by the Random button and at boot.
pub const DEFAULT_DENSITY: f64 = 0.33;

/// Interval between automatic steps when playback starts.
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Multiplier applied to a dead cell's trail each step
/// (0.9 = slow fade, 0.6 = fast fade).
pub const FADE_DECAY: f32 = 0.9;

/// Below this intensity a trail snaps to zero and stops being drawn.
pub const FADE_CUTOFF: f32 = 0.05;

/// How many recent grids the repeat detector remembers.
pub const HISTORY_LEN: usize = 10;
