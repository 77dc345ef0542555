use std::io;

use thiserror::Error;

use crate::snake::Cell;

/// Reasons a cell sequence cannot form a snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    #[error("snake needs at least 2 cells, got {0}")]
    TooShort(usize),
    #[error("cell {0} appears more than once")]
    DuplicateCell(Cell),
    #[error("cells {0} and {1} are not one grid step apart")]
    NotAdjacent(Cell, Cell),
}

/// Errors raised while setting up or persisting a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("board of {rows}x{cols} cells is too small to play on")]
    DegenerateGrid { rows: u32, cols: u32 },
    #[error("invalid snake: {0}")]
    InvalidSnake(#[from] SnakeError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures of the persistent score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
