use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::engine::DeathReason;
use crate::grid::GridModel;
use crate::ui::hud::HudInfo;

const CONTROLS_HINT: &str = "arrows/WASD or drag to steer";

/// Draws the start overlay: board size, best score and controls.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, info: &HudInfo, grid: GridModel) {
    render_popup(frame, area, " snake ", Color::Green, start_lines(info, grid));
}

/// Draws the game-over overlay with the final stats of the finished game.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    info: &HudInfo,
    reason: DeathReason,
) {
    render_popup(
        frame,
        area,
        " game over ",
        Color::Red,
        game_over_lines(info, reason),
    );
}

fn start_lines(info: &HudInfo, grid: GridModel) -> Vec<Line<'static>> {
    vec![
        stat_line("Board", format!("{}x{}", grid.rows, grid.cols)),
        stat_line("Best", info.high_score.to_string()),
        Line::from(""),
        Line::from("[Enter]/[Space] start   [Q] quit"),
        Line::from(CONTROLS_HINT).style(Style::default().fg(Color::DarkGray)),
    ]
}

fn game_over_lines(info: &HudInfo, reason: DeathReason) -> Vec<Line<'static>> {
    let cause = match reason {
        DeathReason::WallCollision => "You hit the wall",
        DeathReason::SelfCollision => "You bit your own tail",
    };

    let mut lines = vec![
        Line::from(cause).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        stat_line("Score", info.score.to_string()),
        stat_line("Length", info.length.to_string()),
        stat_line("Time", info.elapsed.to_string()),
        stat_line("Best", info.high_score.to_string()),
    ];
    if info.new_record {
        lines.push(Line::from("New record!").style(Style::default().fg(Color::Green)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[R]/[Enter] play again   [Q] quit"));

    lines
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>7}: "), Style::default().fg(Color::Gray)),
        Span::styled(format!("{value:<7}"), Style::default().fg(Color::White)),
    ])
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    accent: Color,
    lines: Vec<Line<'static>>,
) {
    let popup = popup_rect(area, &lines);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(accent)),
        ),
        popup,
    );
}

/// Sizes a bordered popup to its content and centers it, clamped to `area`.
fn popup_rect(area: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
