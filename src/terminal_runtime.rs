use std::io;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::{TERMINAL_COLUMN_UNITS, TERMINAL_ROW_UNITS};
use crate::input::{Direction, SwipePoint};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode, alternate screen, mouse) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter(capture_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let mouse = if capture_mouse {
            execute!(stdout, EnableMouseCapture)
        } else {
            Ok(())
        };
        if let Err(error) = mouse {
            let _ = cleanup_terminal_best_effort();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal without an owning session, e.g. from a panic hook.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, DisableMouseCapture, Show, LeaveAlternateScreen)
}

/// High-level commands read from the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Steer(Direction),
    SwipeStart(SwipePoint),
    SwipeMove(SwipePoint),
    SwipeEnd,
    Start,
    Restart,
    Quit,
}

/// Waits up to `timeout` for one terminal event and translates it.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    Ok(translate_event(event::read()?))
}

/// Maps a raw crossterm event onto a game command.
#[must_use]
pub fn translate_event(event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Steer(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('r' | 'R') => Some(Command::Restart),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<Command> {
    let point = SwipePoint {
        x: i32::from(mouse.column) * TERMINAL_COLUMN_UNITS,
        y: i32::from(mouse.row) * TERMINAL_ROW_UNITS,
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::SwipeStart(point)),
        MouseEventKind::Drag(MouseButton::Left) => Some(Command::SwipeMove(point)),
        MouseEventKind::Up(MouseButton::Left) => Some(Command::SwipeEnd),
        _ => None,
    }
}
