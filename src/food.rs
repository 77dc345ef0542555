use rand::Rng;

use crate::grid::GridModel;
use crate::snake::{Cell, Snake};

/// How a new food cell is chosen after the previous one is eaten.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FoodPlacement {
    /// One uniform draw over the whole board. The cell may lie under the
    /// snake, in which case it is unreachable until the snake moves off it.
    #[default]
    SingleDraw,
    /// Uniform draw over the cells the snake does not occupy.
    AvoidSnake,
}

/// Food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Places food according to `placement`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: GridModel,
        snake: &Snake,
        placement: FoodPlacement,
    ) -> Self {
        let position = match placement {
            FoodPlacement::SingleDraw => random_cell(rng, grid),
            FoodPlacement::AvoidSnake => {
                free_cell(rng, grid, snake).unwrap_or_else(|| random_cell(rng, grid))
            }
        };

        Self::at(position)
    }
}

/// Draws any cell of the board uniformly.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridModel) -> Cell {
    Cell {
        row: draw_axis(rng, grid.rows),
        col: draw_axis(rng, grid.cols),
    }
}

/// Draws a cell the snake does not occupy, or `None` when the board is full.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridModel, snake: &Snake) -> Option<Cell> {
    let mut candidates = Vec::with_capacity(grid.cell_count());

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let cell = Cell::new(row as i32, col as i32);
            if !snake.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

fn draw_axis<R: Rng + ?Sized>(rng: &mut R, upper: u32) -> i32 {
    if upper == 0 {
        return 0;
    }

    rng.gen_range(0..upper) as i32
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Food, FoodPlacement, free_cell, random_cell};
    use crate::grid::GridModel;
    use crate::snake::{Cell, Snake};

    fn short_snake() -> Snake {
        Snake::from_cells(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
            .expect("valid snake")
    }

    #[test]
    fn random_cells_stay_on_the_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridModel::new(6, 8);

        for _ in 0..200 {
            assert!(grid.contains(random_cell(&mut rng, grid)));
        }
    }

    #[test]
    fn avoiding_placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = short_snake();
        let grid = GridModel::new(6, 8);

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, grid, &snake, FoodPlacement::AvoidSnake);
            assert!(!snake.occupies(food.position));
            assert!(grid.contains(food.position));
        }
    }

    #[test]
    fn full_board_has_no_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridModel::new(1, 3);

        assert_eq!(free_cell(&mut rng, grid, &short_snake()), None);
    }

    #[test]
    fn avoiding_placement_on_full_board_falls_back_to_any_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridModel::new(1, 3);

        let food = Food::spawn(&mut rng, grid, &short_snake(), FoodPlacement::AvoidSnake);

        assert!(grid.contains(food.position));
    }

    #[test]
    fn single_draw_can_land_under_the_snake() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = GridModel::new(1, 3);

        let food = Food::spawn(&mut rng, grid, &short_snake(), FoodPlacement::SingleDraw);

        assert!(short_snake().occupies(food.position));
    }
}
