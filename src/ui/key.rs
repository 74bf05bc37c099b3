//! ui/key.rs
//!
//! Credential screen. Shown when no usable API key can be resolved, and
//! again when the remote rejects the configured one. Input is masked.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::config::KEY_ENV;
use crate::state::AppState;
use crate::ui::input::centered;
use crate::ui::tui::{EMERALD, EMERALD_DIM};

pub fn render(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(centered(area, 64));

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "AGENCY CREDENTIAL REQUIRED",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Uplink to Agency HQ is locked until a valid key is supplied.",
            Style::default().fg(EMERALD_DIM),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, rows[0]);

    let masked = "•".repeat(state.key_input.chars().count());
    let content = if masked.is_empty() {
        Span::styled("PASTE GEMINI API KEY", Style::default().fg(EMERALD_DIM))
    } else {
        Span::styled(masked, Style::default().fg(EMERALD))
    };

    f.render_widget(
        Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(EMERALD))
                .title(Span::styled(
                    " CREDENTIAL ",
                    Style::default().fg(EMERALD_DIM),
                )),
        ),
        rows[1],
    );

    let cursor_x = rows[1].x + 1 + state.key_input.chars().count() as u16;
    f.set_cursor(
        cursor_x.min(rows[1].x + rows[1].width.saturating_sub(2)),
        rows[1].y + 1,
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        format!("ENTER: verify and store   ({} overrides this screen)", KEY_ENV),
        Style::default().fg(EMERALD_DIM),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, rows[2]);
}
