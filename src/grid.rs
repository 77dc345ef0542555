use crate::snake::Cell;

/// Size of one board cell in viewport units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// Rendered viewport size in the same units as [`CellSize`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Fixed row/column board geometry.
///
/// Computed once from the viewport; a viewport smaller than one cell yields
/// zero rows or columns, which is left to callers to reject.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridModel {
    pub rows: u32,
    pub cols: u32,
}

impl GridModel {
    /// Creates a grid with explicit dimensions.
    #[must_use]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Fits as many whole cells as possible into `viewport`.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, cell: CellSize) -> Self {
        Self {
            rows: viewport.height.checked_div(cell.height).unwrap_or(0),
            cols: viewport.width.checked_div(cell.width).unwrap_or(0),
        }
    }

    /// Returns true when `cell` lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && i64::from(cell.row) < i64::from(self.rows)
            && i64::from(cell.col) < i64::from(self.cols)
    }

    /// Flat `row * cols + col` index of an in-bounds cell.
    #[must_use]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        Some(row * self.cols as usize + col)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns true when the canonical two-cell snake fits on the board.
    #[must_use]
    pub fn is_playable(self) -> bool {
        self.rows >= 1 && self.cols >= 2
    }
}
