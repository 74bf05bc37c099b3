//! ui/input.rs
//!
//! Enlistment questionnaire: four modules, all required before the
//! NEXT PHASE action arms.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Field, MONTHS};
use crate::ui::tui::{EMERALD, EMERALD_DIM};

struct Module {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
}

const MODULES: [Module; 3] = [
    Module {
        field: Field::Color,
        label: " MODULE 01: CHROMATIC REFERENCE ",
        placeholder: "FAVORITE COLOR",
    },
    Module {
        field: Field::Animal,
        label: " MODULE 02: BIO-AFFINITY ",
        placeholder: "FAVORITE ANIMAL",
    },
    Module {
        field: Field::Snack,
        label: " MODULE 03: SUSTENANCE PREFERENCE ",
        placeholder: "FAVORITE SNACK",
    },
];

pub fn render(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3), // month
            Constraint::Length(3), // submit
            Constraint::Min(0),
        ])
        .split(centered(area, 60));

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "ENLISTMENT QUESTIONNAIRE",
            Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Complete the following modules to initiate profile generation.",
            Style::default().fg(EMERALD_DIM),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, rows[0]);

    for (i, module) in MODULES.iter().enumerate() {
        render_text_field(f, rows[i + 1], state, module);
    }

    render_month_field(f, rows[4], state);
    render_submit(f, rows[5], state);
}

fn render_text_field(f: &mut ratatui::Frame, area: Rect, state: &AppState, module: &Module) {
    let focused = state.form.focus == module.field;
    let value = match module.field {
        Field::Color => &state.form.color,
        Field::Animal => &state.form.animal,
        Field::Snack => &state.form.snack,
        Field::Month => unreachable!("month renders separately"),
    };

    let content = if value.is_empty() {
        Span::styled(module.placeholder, Style::default().fg(EMERALD_DIM))
    } else {
        Span::styled(value.to_uppercase(), Style::default().fg(EMERALD))
    };

    f.render_widget(
        Paragraph::new(Line::from(content)).block(field_block(module.label, focused)),
        area,
    );

    if focused {
        let cursor_x = area.x + 1 + UnicodeWidthStr::width(value.as_str()) as u16;
        f.set_cursor(cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1);
    }
}

fn render_month_field(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let focused = state.form.focus == Field::Month;

    let content = match state.form.month {
        Some(i) => Span::styled(
            format!("‹ {} ›", MONTHS[i].to_uppercase()),
            Style::default().fg(EMERALD),
        ),
        None => Span::styled(
            "SELECT BIRTH MONTH (←/→)",
            Style::default().fg(EMERALD_DIM),
        ),
    };

    f.render_widget(
        Paragraph::new(Line::from(content))
            .block(field_block(" MODULE 04: TEMPORAL INDEX ", focused)),
        area,
    );
}

fn render_submit(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let armed = state.form.is_valid();

    let style = if armed {
        Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(EMERALD_DIM)
    };

    let label = if armed {
        "▶ NEXT PHASE ◀  (ENTER)"
    } else {
        "NEXT PHASE  (complete all modules)"
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            ),
        area,
    );
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(EMERALD)
    } else {
        Style::default().fg(EMERALD_DIM)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(title, Style::default().fg(EMERALD_DIM)))
}

/// Clamp the body to a readable column width, centered.
pub fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
