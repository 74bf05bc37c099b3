use std::time::{Duration, Instant};

use chrono::Local;

use crate::state::{AppState, LogLevel, LogLine, Phase, MAX_LOGS};

/// The fake processing ticker. Purely cosmetic; the real work is the
/// single remote call running on the worker thread.
pub const PROCESSING_LOG: [&str; 7] = [
    "INITIALIZING ENCRYPTION PROTOCOLS...",
    "CROSS-REFERENCING GLOBAL DATABASES...",
    "ISOLATING UNIQUE OPERATIVE TRAITS...",
    "AUTHENTICATING CLEARANCE LEVEL...",
    "SYNTHESIZING AGENT PROFILE...",
    "GENERATING CRYPTOGRAPHIC CODENAME...",
    "FINALIZING AGENCY ENROLLMENT...",
];

pub const PROCESSING_LOG_CADENCE: Duration = Duration::from_millis(600);

pub fn log(state: &mut AppState, level: LogLevel, msg: impl Into<String>) {
    if state.logs.len() >= MAX_LOGS {
        state.logs.pop_front();
    }

    state.logs.push_back(LogLine {
        level,
        text: msg.into(),
        stamp: Local::now().format("%H:%M:%S").to_string(),
    });
}

/// Append the next canned message once its slot comes up. Disarms itself
/// when the list is exhausted or the phase changes.
pub fn tick_processing_log(state: &mut AppState, now: Instant) {
    if state.phase != Phase::Processing {
        state.next_log_at = None;
        return;
    }

    let at = match state.next_log_at {
        Some(at) => at,
        None => return,
    };

    if now < at {
        return;
    }

    match PROCESSING_LOG.get(state.log_cursor) {
        Some(msg) => {
            log(state, LogLevel::Info, *msg);
            state.log_cursor += 1;
            state.next_log_at = Some(at + PROCESSING_LOG_CADENCE);
        }
        None => state.next_log_at = None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processing_state(now: Instant) -> AppState {
        let mut state = AppState::new(Phase::Processing);
        state.next_log_at = Some(now);
        state
    }

    #[test]
    fn messages_appear_in_order_on_cadence() {
        let now = Instant::now();
        let mut state = processing_state(now);

        tick_processing_log(&mut state, now);
        assert_eq!(state.logs.len(), 1);
        assert_eq!(state.logs[0].text, PROCESSING_LOG[0]);

        // before the next slot, nothing new
        tick_processing_log(&mut state, now + Duration::from_millis(300));
        assert_eq!(state.logs.len(), 1);

        tick_processing_log(&mut state, now + PROCESSING_LOG_CADENCE);
        assert_eq!(state.logs.len(), 2);
        assert_eq!(state.logs[1].text, PROCESSING_LOG[1]);
    }

    #[test]
    fn ticker_disarms_after_last_message() {
        let now = Instant::now();
        let mut state = processing_state(now);

        for i in 0..=PROCESSING_LOG.len() {
            tick_processing_log(&mut state, now + PROCESSING_LOG_CADENCE * i as u32);
        }

        assert_eq!(state.logs.len(), PROCESSING_LOG.len());
        assert!(state.next_log_at.is_none());
    }

    #[test]
    fn ticker_stops_outside_processing() {
        let now = Instant::now();
        let mut state = processing_state(now);
        state.phase = Phase::Result;

        tick_processing_log(&mut state, now + PROCESSING_LOG_CADENCE);
        assert!(state.logs.is_empty());
        assert!(state.next_log_at.is_none());
    }

    #[test]
    fn ring_buffer_caps_log_length() {
        let mut state = AppState::new(Phase::Processing);
        for i in 0..(MAX_LOGS + 10) {
            log(&mut state, LogLevel::Info, format!("line {}", i));
        }
        assert_eq!(state.logs.len(), MAX_LOGS);
        assert_eq!(state.logs[0].text, "line 10");
    }
}
