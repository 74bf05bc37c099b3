//! ui/events.rs
//!
//! Keyboard handling, dispatched on the active phase. All state changes
//! go through the machine's transition functions.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{self, Config};
use crate::machine;
use crate::state::{AppState, Field, Phase};

pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        state.should_exit = true;
        return;
    }

    match state.phase {
        Phase::KeyRequired => handle_key_screen(state, key),
        Phase::Input => handle_form(state, key),
        Phase::Scan => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.scan.start(now);
            }
        }
        Phase::Processing => {}
        Phase::Result => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                machine::reset(state);
            }
        }
    }
}

fn handle_key_screen(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => state.key_input.push(c),
        KeyCode::Backspace => {
            state.key_input.pop();
        }
        KeyCode::Enter => {
            let api_key = state.key_input.trim().to_string();
            if api_key.is_empty() {
                return;
            }

            if let Err(e) = config::save(&Config { api_key }) {
                state.error = Some(format!("FAILED TO STORE CREDENTIAL: {}", e));
                return;
            }

            state.key_input.clear();
            machine::credential_accepted(state);
        }
        _ => {}
    }
}

fn handle_form(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Enter => machine::submit_input(state),
        KeyCode::Left if state.form.focus == Field::Month => state.form.cycle_month(-1),
        KeyCode::Right if state.form.focus == Field::Month => state.form.cycle_month(1),
        KeyCode::Backspace => {
            if let Some(text) = state.form.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = state.form.focused_text_mut() {
                text.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut AppState, s: &str, now: Instant) {
        for c in s.chars() {
            handle_key(state, press(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::Input);

        type_str(&mut state, "blue", now);
        assert_eq!(state.form.color, "blue");

        handle_key(&mut state, press(KeyCode::Backspace), now);
        assert_eq!(state.form.color, "blu");

        handle_key(&mut state, press(KeyCode::Tab), now);
        type_str(&mut state, "shark", now);
        assert_eq!(state.form.animal, "shark");
    }

    #[test]
    fn month_field_ignores_text_and_cycles() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::Input);
        state.form.focus = Field::Month;

        type_str(&mut state, "may", now);
        assert!(state.form.month.is_none());

        handle_key(&mut state, press(KeyCode::Right), now);
        assert_eq!(state.form.month, Some(0));
        handle_key(&mut state, press(KeyCode::Left), now);
        assert_eq!(state.form.month, Some(11));
    }

    #[test]
    fn enter_submits_only_a_complete_form() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::Input);

        handle_key(&mut state, press(KeyCode::Enter), now);
        assert_eq!(state.phase, Phase::Input);

        state.form.color = "blue".into();
        state.form.animal = "shark".into();
        state.form.snack = "popcorn".into();
        state.form.month = Some(0);

        handle_key(&mut state, press(KeyCode::Enter), now);
        assert_eq!(state.phase, Phase::Scan);
    }

    #[test]
    fn enter_starts_the_scan() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::Scan);

        assert!(!state.scan.is_running());
        handle_key(&mut state, press(KeyCode::Enter), now);
        assert!(state.scan.is_running());
    }

    #[test]
    fn keys_are_ignored_while_processing() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::Processing);

        handle_key(&mut state, press(KeyCode::Enter), now);
        handle_key(&mut state, press(KeyCode::Char('x')), now);
        assert_eq!(state.phase, Phase::Processing);
    }

    #[test]
    fn escape_requests_exit_from_any_phase() {
        let now = Instant::now();
        for phase in [Phase::KeyRequired, Phase::Input, Phase::Result] {
            let mut state = AppState::new(phase);
            handle_key(&mut state, press(KeyCode::Esc), now);
            assert!(state.should_exit);
        }
    }

    #[test]
    fn key_screen_collects_masked_input() {
        let now = Instant::now();
        let mut state = AppState::new(Phase::KeyRequired);

        type_str(&mut state, "abc123", now);
        assert_eq!(state.key_input, "abc123");

        handle_key(&mut state, press(KeyCode::Backspace), now);
        assert_eq!(state.key_input, "abc12");

        // empty submission is a no-op
        state.key_input.clear();
        handle_key(&mut state, press(KeyCode::Enter), now);
        assert_eq!(state.phase, Phase::KeyRequired);
    }
}
