use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::error::SnakeError;
use crate::input::Direction;

/// One discrete board position.
///
/// Coordinates are signed so a head stepped past the edge can be represented
/// and rejected by the wall check.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Returns true when `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Snake body, head first.
///
/// Always holds at least two distinct, orthogonally adjacent cells when built
/// through [`Snake::from_cells`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Validates and builds a snake from explicit cells (front is head).
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, SnakeError> {
        if cells.len() < 2 {
            return Err(SnakeError::TooShort(cells.len()));
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(*cell) {
                return Err(SnakeError::DuplicateCell(*cell));
            }
        }

        for pair in cells.windows(2) {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(SnakeError::NotAdjacent(pair[0], pair[1]));
            }
        }

        Ok(Self {
            body: VecDeque::from(cells),
        })
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        // Construction guarantees a non-empty body.
        self.body[0]
    }

    /// Returns true if any segment, head included, occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if `cell` matches any segment behind the head.
    ///
    /// The tail is included even though a plain move would vacate it.
    #[must_use]
    pub fn body_contains(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == cell)
    }

    /// Moves the head to `new_head`, keeping the tail when `grow` is set.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Snake};
    use crate::error::SnakeError;
    use crate::input::Direction;

    #[test]
    fn step_moves_one_cell_along_each_axis() {
        let origin = Cell::new(4, 4);

        assert_eq!(origin.step(Direction::Up), Cell::new(3, 4));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 4));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 3));
        assert_eq!(origin.step(Direction::Right), Cell::new(4, 5));
    }

    #[test]
    fn construction_rejects_duplicate_cells() {
        let result = Snake::from_cells(vec![
            Cell::new(4, 4),
            Cell::new(4, 5),
            Cell::new(4, 6),
            Cell::new(4, 5),
        ]);

        assert_eq!(result, Err(SnakeError::DuplicateCell(Cell::new(4, 5))));
    }

    #[test]
    fn construction_rejects_single_cell() {
        assert_eq!(
            Snake::from_cells(vec![Cell::new(1, 1)]),
            Err(SnakeError::TooShort(1))
        );
    }

    #[test]
    fn construction_rejects_gaps_and_diagonals() {
        assert_eq!(
            Snake::from_cells(vec![Cell::new(1, 1), Cell::new(1, 3)]),
            Err(SnakeError::NotAdjacent(Cell::new(1, 1), Cell::new(1, 3)))
        );
        assert_eq!(
            Snake::from_cells(vec![Cell::new(1, 1), Cell::new(2, 2)]),
            Err(SnakeError::NotAdjacent(Cell::new(1, 1), Cell::new(2, 2)))
        );
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::from_cells(vec![Cell::new(4, 4), Cell::new(4, 5)])
            .expect("valid snake");

        snake.advance(Cell::new(4, 3), false);

        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(4, 3), Cell::new(4, 4)]
        );
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::from_cells(vec![Cell::new(4, 4), Cell::new(4, 5)])
            .expect("valid snake");

        snake.advance(Cell::new(4, 3), true);

        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(Cell::new(4, 5)));
    }

    #[test]
    fn body_check_skips_head_but_includes_tail() {
        let snake = Snake::from_cells(vec![Cell::new(2, 2), Cell::new(2, 3), Cell::new(3, 3)])
            .expect("valid snake");

        assert!(!snake.body_contains(Cell::new(2, 2)));
        assert!(snake.body_contains(Cell::new(3, 3)));
    }
}
