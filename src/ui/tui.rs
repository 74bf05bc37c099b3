// src/ui/tui.rs

use std::io;

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Terminal,
};

use crate::state::{AppState, Phase};
use crate::ui::{input, key, processing, profile, scanner};

pub const EMERALD: Color = Color::Rgb(0, 220, 140);
pub const EMERALD_DIM: Color = Color::Rgb(0, 120, 80);
pub const ALERT: Color = Color::Rgb(235, 80, 80);

pub fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)
}

pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

pub fn draw_ui<B: Backend>(terminal: &mut Terminal<B>, state: &AppState) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(8), Constraint::Length(1)])
            .split(f.size());

        let title = match (&state.profile, state.phase) {
            (Some(p), Phase::Result) => {
                format!(" OPERATIVE PROFILE: {} ", p.full_name.to_uppercase())
            }
            _ => " AGENCY ENROLLMENT TERMINAL ".to_string(),
        };

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(EMERALD_DIM))
            .title(Span::styled(
                title,
                Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = frame.inner(chunks[0]);
        f.render_widget(frame, chunks[0]);

        let body = if state.error.is_some() {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(4)])
                .split(inner);
            render_error_banner(f, rows[0], state);
            rows[1]
        } else {
            inner
        };

        match state.phase {
            Phase::KeyRequired => key::render(f, body, state),
            Phase::Input => input::render(f, body, state),
            Phase::Scan => scanner::render(f, body, state),
            Phase::Processing => processing::render(f, body, state),
            Phase::Result => profile::render(f, body, state),
        }

        render_status(f, chunks[1], state);
    })?;

    Ok(())
}

fn render_error_banner(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let msg = state.error.as_deref().unwrap_or_default();

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "SYSTEM ERROR: ",
            Style::default().fg(ALERT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(msg, Style::default().fg(ALERT)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ALERT)),
    );

    f.render_widget(banner, area);
}

fn render_status(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let dim = Style::default().fg(EMERALD_DIM);

    f.render_widget(Paragraph::new("UPLINK: STABLE").style(dim), cols[0]);

    // pulse the relay notice on alternate ticks
    let relay = Style::default().fg(if state.spinner_tick % 16 < 8 {
        EMERALD
    } else {
        EMERALD_DIM
    });
    f.render_widget(
        Paragraph::new("SATELLITE NODE-X7 RELAY ACTIVE")
            .style(relay)
            .alignment(Alignment::Center),
        cols[1],
    );

    let clock = format!("EST: {}", Local::now().format("%H:%M:%S"));
    f.render_widget(
        Paragraph::new(clock)
            .style(dim)
            .alignment(Alignment::Right),
        cols[2],
    );
}
