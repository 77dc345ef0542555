use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{TERMINAL_COLUMN_UNITS, TERMINAL_ROW_UNITS};
use crate::engine::DeathReason;
use crate::game::GameState;
use crate::grid::{GridModel, Viewport};
use crate::input::Direction;
use crate::session::{Presenter, View};
use crate::snake::Cell;
use crate::ui::hud::{HUD_HEIGHT, HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns used to draw one board cell.
const COLUMNS_PER_CELL: u16 = 2;

const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_FOOD: &str = "()";
const GLYPH_EMPTY: &str = "  ";

const COLOR_HEAD: Color = Color::White;
const COLOR_BODY: Color = Color::Green;
const COLOR_FOOD: Color = Color::Red;
const COLOR_BORDER: Color = Color::DarkGray;

/// What occupies one board cell in a frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tile {
    Empty,
    Food,
    Body,
    Head,
}

/// Dense `row * cols + col` picture of the board, rebuilt from state each frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardFrame {
    grid: GridModel,
    tiles: Vec<Tile>,
}

impl BoardFrame {
    /// Paints food, then body, then head; later layers win.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let grid = state.grid();
        let mut frame = Self {
            grid,
            tiles: vec![Tile::Empty; grid.cell_count()],
        };

        frame.paint(state.food.position, Tile::Food);
        for segment in state.snake.segments().skip(1) {
            frame.paint(*segment, Tile::Body);
        }
        frame.paint(state.snake.head(), Tile::Head);

        frame
    }

    /// Returns the tile at `cell`; off-board cells read as empty.
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.grid
            .index_of(cell)
            .and_then(|index| self.tiles.get(index).copied())
            .unwrap_or(Tile::Empty)
    }

    #[must_use]
    pub fn grid(&self) -> GridModel {
        self.grid
    }

    fn paint(&mut self, cell: Cell, tile: Tile) {
        if let Some(slot) = self.grid.index_of(cell).and_then(|i| self.tiles.get_mut(i)) {
            *slot = tile;
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Overlay {
    None,
    Start,
    GameOver(DeathReason),
}

/// Presenter that keeps the latest frame and draws it with ratatui.
#[derive(Debug, Clone)]
pub struct TerminalPresenter {
    board: Option<BoardFrame>,
    heading: Direction,
    hud: HudInfo,
    overlay: Overlay,
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self {
            board: None,
            heading: Direction::Left,
            hud: HudInfo::default(),
            overlay: Overlay::None,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, view: &View<'_>) {
        self.board = Some(BoardFrame::from_state(view.state));
        self.heading = view.state.direction;
        self.hud = HudInfo {
            score: view.state.score,
            high_score: view.high_score,
            new_record: view.new_record,
            length: view.state.snake.len(),
            elapsed: view.elapsed,
        };
    }

    fn show_start(&mut self) {
        self.overlay = Overlay::Start;
    }

    fn show_game_over(&mut self, reason: DeathReason) {
        self.overlay = Overlay::GameOver(reason);
    }

    fn hide_overlay(&mut self) {
        self.overlay = Overlay::None;
    }
}

impl TerminalPresenter {
    /// Renders the full game frame from the last presented state.
    pub fn draw(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let play_area = render_hud(frame, area, &self.hud);

        let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
        let inner = block.inner(play_area);
        frame.render_widget(block, play_area);

        if let Some(board) = &self.board {
            render_board(frame, inner, board, self.heading);
        }

        match self.overlay {
            Overlay::None => {}
            Overlay::Start => {
                let grid = self.board.as_ref().map_or(GridModel::new(0, 0), BoardFrame::grid);
                render_start_menu(frame, play_area, &self.hud, grid);
            }
            Overlay::GameOver(reason) => {
                render_game_over_menu(frame, play_area, &self.hud, reason);
            }
        }
    }
}

/// Board area, in viewport units, for a terminal of `size`.
#[must_use]
pub fn board_viewport(size: Size) -> Viewport {
    let inner = board_area(Rect::new(0, 0, size.width, size.height));

    Viewport {
        width: u32::from(inner.width) * TERMINAL_COLUMN_UNITS as u32,
        height: u32::from(inner.height) * TERMINAL_ROW_UNITS as u32,
    }
}

fn board_area(area: Rect) -> Rect {
    let play_height = area.height.saturating_sub(HUD_HEIGHT);
    let play_area = Rect {
        height: play_height,
        ..area
    };
    Block::bordered().inner(play_area)
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, board: &BoardFrame, heading: Direction) {
    let grid = board.grid();
    let buffer = frame.buffer_mut();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let cell = Cell::new(row as i32, col as i32);
            let Some((x, y)) = logical_to_terminal(inner, cell) else {
                continue;
            };

            let (glyph, style) = match board.tile(cell) {
                Tile::Empty => (GLYPH_EMPTY, Style::new()),
                Tile::Food => (GLYPH_FOOD, Style::new().fg(COLOR_FOOD)),
                Tile::Body => (GLYPH_SNAKE_BODY, Style::new().fg(COLOR_BODY)),
                Tile::Head => (
                    head_glyph(heading),
                    Style::new()
                        .fg(COLOR_HEAD)
                        .bg(COLOR_BODY)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            buffer.set_string(x, y, glyph, style);
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲▲",
        Direction::Down => "▼▼",
        Direction::Left => "◀◀",
        Direction::Right => "▶▶",
    }
}

fn logical_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(cell.col).ok()?.checked_mul(COLUMNS_PER_CELL)?;
    let y_offset = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
