use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::GameError;
use crate::food::{Food, FoodPlacement};
use crate::game::GameState;
use crate::grid::GridModel;
use crate::input::{Direction, direction_change_is_valid};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    Continue(GameState),
    GameOver(DeathReason),
}

/// Advances game states one tick at a time.
///
/// Owns the randomness used for food placement so `step` stays a plain
/// function of its inputs for a given seed.
#[derive(Debug, Clone)]
pub struct TickEngine {
    grid: GridModel,
    placement: FoodPlacement,
    rng: StdRng,
}

impl TickEngine {
    #[must_use]
    pub fn new(grid: GridModel, placement: FoodPlacement) -> Self {
        Self::with_rng(grid, placement, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(grid: GridModel, placement: FoodPlacement, seed: u64) -> Self {
        Self::with_rng(grid, placement, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridModel, placement: FoodPlacement, rng: StdRng) -> Self {
        Self {
            grid,
            placement,
            rng,
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridModel {
        self.grid
    }

    /// Builds the canonical starting state with a freshly drawn food cell.
    pub fn fresh_state(&mut self) -> Result<GameState, GameError> {
        GameState::new(self.grid, &mut self.rng, self.placement)
    }

    /// Computes the state after one tick.
    ///
    /// Checks run in a fixed order: direction, movement, walls, body, food.
    /// The body check uses the pre-move body, so stepping onto the current
    /// tail is a collision.
    pub fn step(&mut self, state: &GameState, intended: Direction) -> Outcome {
        let direction = if direction_change_is_valid(state.direction, intended) {
            intended
        } else {
            state.direction
        };

        let new_head = state.snake.head().step(direction);

        if !state.grid().contains(new_head) {
            return Outcome::GameOver(DeathReason::WallCollision);
        }

        if state.snake.body_contains(new_head) {
            return Outcome::GameOver(DeathReason::SelfCollision);
        }

        let mut next = state.clone();
        next.direction = direction;

        if new_head == state.food.position {
            next.snake.advance(new_head, true);
            next.score += 1;
            next.food = Food::spawn(&mut self.rng, state.grid(), &next.snake, self.placement);
            return Outcome::Continue(next);
        }

        next.snake.advance(new_head, false);
        Outcome::Continue(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeathReason, Outcome, TickEngine};
    use crate::food::{Food, FoodPlacement};
    use crate::game::GameState;
    use crate::grid::GridModel;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    fn board() -> GridModel {
        GridModel::new(10, 10)
    }

    fn engine() -> TickEngine {
        TickEngine::new_with_seed(board(), FoodPlacement::SingleDraw, 1)
    }

    fn state(cells: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
        let snake = Snake::from_cells(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect())
            .expect("valid snake");
        GameState::from_parts(board(), snake, direction, Food::at(Cell::new(food.0, food.1)))
    }

    fn continued(outcome: Outcome) -> GameState {
        match outcome {
            Outcome::Continue(state) => state,
            Outcome::GameOver(reason) => panic!("unexpected game over: {reason:?}"),
        }
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let start = state(&[(4, 4), (4, 5)], Direction::Left, (4, 3));

        let next = continued(engine().step(&start, Direction::Left));

        assert_eq!(
            next.snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(4, 3), Cell::new(4, 4), Cell::new(4, 5)]
        );
        assert_eq!(next.score, 1);
        assert!(board().contains(next.food.position));
    }

    #[test]
    fn normal_move_keeps_length() {
        let start = state(&[(4, 4), (4, 5)], Direction::Left, (0, 0));

        let next = continued(engine().step(&start, Direction::Left));

        assert_eq!(next.snake.len(), 2);
        assert_eq!(next.snake.head(), Cell::new(4, 3));
        assert_eq!(next.score, 0);
        assert_eq!(next.food, start.food);
    }

    #[test]
    fn leaving_the_top_edge_ends_the_game() {
        let start = state(&[(0, 4), (0, 5)], Direction::Up, (5, 5));

        assert_eq!(
            engine().step(&start, Direction::Up),
            Outcome::GameOver(DeathReason::WallCollision)
        );
    }

    #[test]
    fn leaving_the_right_edge_ends_the_game() {
        let start = state(&[(3, 9), (3, 8)], Direction::Right, (5, 5));

        assert_eq!(
            engine().step(&start, Direction::Right),
            Outcome::GameOver(DeathReason::WallCollision)
        );
    }

    #[test]
    fn running_into_body_ends_the_game() {
        let start = state(
            &[(2, 2), (2, 1), (3, 1), (3, 2), (3, 3)],
            Direction::Right,
            (7, 7),
        );

        assert_eq!(
            engine().step(&start, Direction::Down),
            Outcome::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn moving_onto_vacating_tail_is_still_a_collision() {
        let start = state(&[(2, 2), (2, 3), (3, 3), (3, 2)], Direction::Left, (7, 7));

        assert_eq!(
            engine().step(&start, Direction::Down),
            Outcome::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn reversal_keeps_current_heading() {
        let start = state(&[(4, 4), (4, 5)], Direction::Left, (0, 0));

        let next = continued(engine().step(&start, Direction::Right));

        assert_eq!(next.direction, Direction::Left);
        assert_eq!(next.snake.head(), Cell::new(4, 3));
    }

    #[test]
    fn orthogonal_turn_is_committed() {
        let start = state(&[(4, 4), (4, 5)], Direction::Left, (0, 0));

        let next = continued(engine().step(&start, Direction::Down));

        assert_eq!(next.direction, Direction::Down);
        assert_eq!(next.snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn wall_check_runs_before_food_check() {
        let mut start = state(&[(0, 4), (0, 5)], Direction::Up, (0, 0));
        // Food on the head's own column just past the edge cannot be eaten.
        start.food = Food::at(Cell::new(-1, 4));

        assert_eq!(
            engine().step(&start, Direction::Up),
            Outcome::GameOver(DeathReason::WallCollision)
        );
    }

    #[test]
    fn self_check_runs_before_food_check() {
        let start = state(&[(2, 2), (2, 3), (3, 3), (3, 2)], Direction::Left, (3, 2));

        assert_eq!(
            engine().step(&start, Direction::Down),
            Outcome::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn same_seed_gives_same_food_sequence() {
        let start = state(&[(4, 4), (4, 5)], Direction::Left, (4, 3));

        let first = continued(engine().step(&start, Direction::Left));
        let second = continued(engine().step(&start, Direction::Left));

        assert_eq!(first.food, second.food);
    }
}
