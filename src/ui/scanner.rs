//! ui/scanner.rs
//!
//! Biometric verification screen. Renders the scan simulator; the
//! simulator itself is pure state (src/scan.rs).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::state::AppState;
use crate::ui::input::centered;
use crate::ui::tui::{EMERALD, EMERALD_DIM};

pub fn render(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(centered(area, 56));

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "BIOMETRIC VERIFICATION",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Place hand on scanning interface to finalize enrollment.",
            Style::default().fg(EMERALD_DIM),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, rows[0]);

    if state.scan.is_running() || state.scan.progress() > 0 {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(EMERALD_DIM)),
            )
            .gauge_style(Style::default().fg(EMERALD))
            .percent(state.scan.progress() as u16);
        f.render_widget(gauge, rows[1]);

        let caption = format!(
            "CAPTURING NEURAL SIGNATURE... {}%",
            state.scan.progress()
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                caption,
                Style::default().fg(EMERALD),
            )))
            .alignment(Alignment::Center),
            rows[2],
        );
    } else {
        // pulse the idle button
        let style = if state.spinner_tick % 16 < 8 {
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(EMERALD_DIM).add_modifier(Modifier::BOLD)
        };

        f.render_widget(
            Paragraph::new(Line::from(Span::styled("PRESS ENTER TO SCAN", style)))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style),
                ),
            rows[1],
        );
    }
}
