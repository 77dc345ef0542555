use std::path::PathBuf;
use std::time::Duration;

use crate::food::FoodPlacement;
use crate::grid::CellSize;

/// Fixed cell dimensions in viewport units.
pub const CELL_SIZE: CellSize = CellSize {
    width: 30,
    height: 30,
};

/// Tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 300;

/// Elapsed-time counter interval in milliseconds.
pub const ELAPSED_INTERVAL_MS: u64 = 1000;

/// Minimum swipe distance, in viewport units, on at least one axis.
pub const SWIPE_THRESHOLD: i32 = 30;

/// Viewport units covered by one terminal column.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so two
/// columns and one row make a square board cell.
pub const TERMINAL_COLUMN_UNITS: i32 = 15;

/// Viewport units covered by one terminal row.
pub const TERMINAL_ROW_UNITS: i32 = 30;

const APP_DIR_NAME: &str = "block-snake";
const SCORE_FILE_NAME: &str = "scores.json";
const LOG_FILE_NAME: &str = "block-snake.log";

/// Runtime settings resolved from command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick_interval: Duration,
    pub elapsed_interval: Duration,
    pub swipe_threshold: i32,
    pub food_placement: FoodPlacement,
    pub seed: Option<u64>,
    pub mouse: bool,
    pub scores_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            elapsed_interval: Duration::from_millis(ELAPSED_INTERVAL_MS),
            swipe_threshold: SWIPE_THRESHOLD,
            food_placement: FoodPlacement::SingleDraw,
            seed: None,
            mouse: true,
            scores_path: default_scores_path(),
            log_path: default_log_path(),
        }
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    app_data_dir().join(SCORE_FILE_NAME)
}

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    app_data_dir().join(LOG_FILE_NAME)
}

fn app_data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}
