use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::clock::ElapsedTime;

/// Terminal rows reserved below the board.
pub const HUD_HEIGHT: u16 = 1;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Values displayed by the HUD row.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub high_score: u32,
    /// Current game has beaten the record it started against.
    pub new_record: bool,
    pub length: usize,
    pub elapsed: ElapsedTime,
}

/// Renders the HUD row and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: &HudInfo) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);
    let hud_area = inset_horizontal(hud_area, HUD_MARGIN_X);

    let [time_area, score_area] =
        Layout::horizontal([Constraint::Length(8), Constraint::Min(0)]).areas(hud_area);

    frame.render_widget(
        Paragraph::new(info.elapsed.to_string()).style(Style::default().fg(Color::Gray)),
        time_area,
    );
    frame.render_widget(
        Paragraph::new(score_line(info)).alignment(Alignment::Right),
        score_area,
    );

    play_area
}

fn score_line(info: &HudInfo) -> Line<'static> {
    let value = Style::default().fg(Color::White);
    let high_style = if info.new_record {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(info.length.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Score: "),
        Span::styled(info.score.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Hi: "),
        Span::styled(info.high_score.to_string(), high_style),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::text::Line;

    use super::{HudInfo, inset_horizontal, score_line};

    #[test]
    fn score_line_lists_length_score_and_high_score() {
        let line = score_line(&HudInfo {
            score: 3,
            high_score: 9,
            length: 5,
            ..HudInfo::default()
        });

        assert_eq!(line.to_string(), "Length: 5 │ Score: 3 │ Hi: 9");
    }

    #[test]
    fn high_score_is_highlighted_only_for_a_new_record() {
        let tied = score_line(&HudInfo {
            score: 4,
            high_score: 4,
            ..HudInfo::default()
        });
        let beaten = score_line(&HudInfo {
            score: 5,
            high_score: 5,
            new_record: true,
            ..HudInfo::default()
        });

        let high_color = |line: &Line<'_>| line.spans.last().and_then(|span| span.style.fg);
        assert_eq!(high_color(&tied), Some(Color::DarkGray));
        assert_eq!(high_color(&beaten), Some(Color::Green));
    }

    #[test]
    fn inset_never_underflows() {
        let area = inset_horizontal(Rect::new(0, 0, 1, 1), 4);

        assert_eq!(area.width, 0);
        assert_eq!(area.x, 4);
    }
}
