//! ui/processing.rs
//!
//! Processing overlay: radar spinner and the canned log ticker while
//! the generation call is in flight.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::ui::helpers::{level_color, spinner};
use crate::ui::input::centered;
use crate::ui::tui::{EMERALD, EMERALD_DIM};

pub fn render(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(centered(area, 56));

    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            spinner(state.spinner_tick / 2),
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "UPLINK TO AGENCY HQ IN PROGRESS",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(heading, rows[0]);

    let mut lines: Vec<Line> = state
        .logs
        .iter()
        .map(|log| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", log.stamp),
                    Style::default().fg(EMERALD_DIM),
                ),
                Span::styled(&log.text, Style::default().fg(level_color(log.level))),
            ])
        })
        .collect();

    // blinking cursor block at the tail
    if state.spinner_tick % 8 < 4 {
        lines.push(Line::from(Span::styled("█", Style::default().fg(EMERALD))));
    }

    let height = rows[1].height.max(1) as usize;
    let scroll = lines.len().saturating_sub(height);

    f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), rows[1]);
}
