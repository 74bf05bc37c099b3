//! ui/profile.rs
//!
//! Identity card. Read-only render of the generated profile; the only
//! action is reset.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::ui::helpers::clearance_pips;
use crate::ui::input::centered;
use crate::ui::tui::{EMERALD, EMERALD_DIM};

pub fn render(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    // Result is only enterable with a profile in hand
    let profile = match &state.profile {
        Some(p) => p,
        None => return,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(centered(area, 64));

    let headline = Paragraph::new(vec![
        Line::from(Span::styled(
            "AGENT NAME:",
            Style::default().fg(EMERALD_DIM),
        )),
        Line::from(Span::styled(
            format!("SPECIAL AGENT {}", profile.last_name.to_uppercase()),
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(headline, rows[0]);

    render_pair(
        f,
        rows[1],
        (" FULL NAME ", &profile.full_name),
        (" RANK ", &profile.rank),
    );
    render_pair(
        f,
        rows[2],
        (" SPECIALTY ", &profile.specialty),
        (" LAST KNOWN LOCATION ", &profile.last_known_location),
    );

    let clearance = format!(
        "{}   LEVEL {}",
        clearance_pips(profile.clearance_level),
        profile.clearance_level
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            clearance,
            Style::default().fg(EMERALD),
        )))
        .alignment(Alignment::Center)
        .block(field_block(" CLEARANCE LEVEL ")),
        rows[3],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "ENTER: NEW IDENTITY ENROLLMENT",
            Style::default().fg(EMERALD_DIM),
        )))
        .alignment(Alignment::Center),
        rows[4],
    );
}

fn render_pair(
    f: &mut ratatui::Frame,
    area: Rect,
    left: (&'static str, &str),
    right: (&'static str, &str),
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (rect, (title, value)) in cols.iter().zip([left, right]) {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                value.to_uppercase(),
                Style::default().fg(EMERALD),
            )))
            .block(field_block(title)),
            *rect,
        );
    }
}

fn field_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(EMERALD_DIM))
        .title(Span::styled(title, Style::default().fg(EMERALD_DIM)))
}
