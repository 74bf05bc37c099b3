//! ui/helpers.rs
//!
//! Shared UI helper utilities.

use ratatui::style::Color;

use crate::state::LogLevel;

pub fn spinner(frame: usize) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[frame % FRAMES.len()]
}

/// Color mapping for log lines.
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Success => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Info => Color::Gray,
    }
}

/// Clearance pip bar, filled up to `level` out of five.
pub fn clearance_pips(level: u8) -> String {
    (1..=5)
        .map(|i| if i <= level { "▰" } else { "▱" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pips_fill_to_level() {
        assert_eq!(clearance_pips(0), "▱ ▱ ▱ ▱ ▱");
        assert_eq!(clearance_pips(3), "▰ ▰ ▰ ▱ ▱");
        assert_eq!(clearance_pips(5), "▰ ▰ ▰ ▰ ▰");
    }

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner(0), spinner(4));
    }
}
