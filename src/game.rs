use rand::Rng;

use crate::error::GameError;
use crate::food::{Food, FoodPlacement};
use crate::grid::GridModel;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Heading of a freshly laid out snake; points away from its body segment.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Complete state of one game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// Last committed heading.
    pub direction: Direction,
    pub score: u32,
    pub running: bool,
    grid: GridModel,
}

impl GameState {
    /// Lays out the canonical two-cell snake and draws the first food cell.
    pub fn new<R: Rng + ?Sized>(
        grid: GridModel,
        rng: &mut R,
        placement: FoodPlacement,
    ) -> Result<Self, GameError> {
        let snake = canonical_snake(grid)?;
        let food = Food::spawn(rng, grid, &snake, placement);

        Ok(Self::from_parts(grid, snake, INITIAL_DIRECTION, food))
    }

    /// Builds a running state from explicit parts with a zero score.
    #[must_use]
    pub fn from_parts(grid: GridModel, snake: Snake, direction: Direction, food: Food) -> Self {
        Self {
            snake,
            food,
            direction,
            score: 0,
            running: true,
            grid,
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridModel {
        self.grid
    }
}

/// Returns the canonical starting snake: head mid-board, body to its right.
///
/// On a 10x10 board this is `(4, 4), (4, 5)`.
pub fn canonical_snake(grid: GridModel) -> Result<Snake, GameError> {
    if !grid.is_playable() {
        return Err(GameError::DegenerateGrid {
            rows: grid.rows,
            cols: grid.cols,
        });
    }

    let head = Cell::new(((grid.rows - 1) / 2) as i32, ((grid.cols - 1) / 2) as i32);
    let body = head.step(INITIAL_DIRECTION.opposite());

    Ok(Snake::from_cells(vec![head, body])?)
}

/// Best score seen so far; never decreases.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HighScore(u32);

impl HighScore {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raises the high score to `score` if it is higher. Returns true on change.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.0 {
            return false;
        }

        self.0 = score;
        true
    }
}
