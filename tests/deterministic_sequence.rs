use block_snake::engine::{DeathReason, Outcome, TickEngine};
use block_snake::error::SnakeError;
use block_snake::food::{Food, FoodPlacement};
use block_snake::game::{GameState, HighScore};
use block_snake::grid::GridModel;
use block_snake::input::Direction;
use block_snake::snake::{Cell, Snake};

fn board() -> GridModel {
    GridModel::new(10, 10)
}

fn snake(cells: &[(i32, i32)]) -> Snake {
    Snake::from_cells(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect()).expect("valid snake")
}

#[test]
fn eating_on_first_tick_grows_to_three() {
    let mut engine = TickEngine::new_with_seed(board(), FoodPlacement::SingleDraw, 42);
    let state = GameState::from_parts(
        board(),
        snake(&[(4, 4), (4, 5)]),
        Direction::Left,
        Food::at(Cell::new(4, 3)),
    );

    let Outcome::Continue(next) = engine.step(&state, Direction::Left) else {
        panic!("expected the snake to keep moving");
    };

    assert_eq!(
        next.snake.segments().copied().collect::<Vec<_>>(),
        vec![Cell::new(4, 3), Cell::new(4, 4), Cell::new(4, 5)]
    );
    assert_eq!(next.score, 1);
}

#[test]
fn heading_up_from_top_row_hits_the_wall() {
    let mut engine = TickEngine::new_with_seed(board(), FoodPlacement::SingleDraw, 42);
    let state = GameState::from_parts(
        board(),
        snake(&[(0, 4), (0, 5)]),
        Direction::Up,
        Food::at(Cell::new(5, 5)),
    );

    assert_eq!(
        engine.step(&state, Direction::Up),
        Outcome::GameOver(DeathReason::WallCollision)
    );
}

#[test]
fn duplicate_cells_cannot_form_a_snake() {
    let result = Snake::from_cells(vec![
        Cell::new(4, 4),
        Cell::new(4, 5),
        Cell::new(4, 6),
        Cell::new(4, 5),
    ]);

    assert!(matches!(result, Err(SnakeError::DuplicateCell(_))));
}

#[test]
fn long_random_walk_respects_board_and_length_rules() {
    let grid = GridModel::new(8, 12);
    let mut engine = TickEngine::new_with_seed(grid, FoodPlacement::AvoidSnake, 7);
    let mut state = engine.fresh_state().expect("playable grid");
    let mut high = HighScore::default();
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Down,
    ];

    for tick in 0..500 {
        let intended = turns[(tick / 3) % turns.len()];
        let before_len = state.snake.len();
        let before_score = state.score;
        let before_high = high.get();

        match engine.step(&state, intended) {
            Outcome::Continue(next) => {
                assert!(grid.contains(next.snake.head()));
                if next.score == before_score {
                    assert_eq!(next.snake.len(), before_len);
                } else {
                    assert_eq!(next.score, before_score + 1);
                    assert_eq!(next.snake.len(), before_len + 1);
                }
                if intended == state.direction.opposite() {
                    assert_eq!(next.direction, state.direction);
                }
                high.observe(next.score);
                state = next;
            }
            Outcome::GameOver(_) => {
                state = engine.fresh_state().expect("playable grid");
                assert_eq!(state.score, 0);
                assert_eq!(state.direction, Direction::Left);
                assert_eq!(state.snake.len(), 2);
            }
        }

        assert!(high.get() >= before_high);
    }
}
