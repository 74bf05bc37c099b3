use std::collections::VecDeque;
use std::time::Instant;

use serde::Deserialize;

use crate::scan::ScanSim;

pub const MAX_LOGS: usize = 200;

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/* ---------- lifecycle ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    KeyRequired,
    Input,
    Scan,
    Processing,
    Result,
}

/* ---------- enrollment data ---------- */

/// The four answers collected by the questionnaire. Immutable once
/// emitted; discarded on reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserResponses {
    pub favorite_color: String,
    pub favorite_animal: String,
    pub favorite_snack: String,
    pub birth_month: String,
}

/// Identity card returned by the generator. Built exclusively by parsing
/// the remote response; read-only afterwards.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub full_name: String,
    pub last_name: String,
    pub rank: String,
    pub specialty: String,
    pub last_known_location: String,
    pub clearance_level: u8,
}

/* ---------- questionnaire form ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Color,
    Animal,
    Snack,
    Month,
}

#[derive(Clone, Debug)]
pub struct FormState {
    pub color: String,
    pub animal: String,
    pub snack: String,
    pub month: Option<usize>,
    pub focus: Field,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            color: String::new(),
            animal: String::new(),
            snack: String::new(),
            month: None,
            focus: Field::Color,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Color => Field::Animal,
            Field::Animal => Field::Snack,
            Field::Snack => Field::Month,
            Field::Month => Field::Color,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Color => Field::Month,
            Field::Animal => Field::Color,
            Field::Snack => Field::Animal,
            Field::Month => Field::Snack,
        };
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Color => Some(&mut self.color),
            Field::Animal => Some(&mut self.animal),
            Field::Snack => Some(&mut self.snack),
            Field::Month => None,
        }
    }

    pub fn cycle_month(&mut self, delta: isize) {
        let len = MONTHS.len() as isize;
        let next = match self.month {
            Some(i) => (i as isize + delta).rem_euclid(len),
            None => {
                if delta >= 0 {
                    0
                } else {
                    len - 1
                }
            }
        };
        self.month = Some(next as usize);
    }

    /// All four fields non-empty after trimming. No shape validation
    /// beyond that; semantic filtering belongs to the prompt.
    pub fn is_valid(&self) -> bool {
        !self.color.trim().is_empty()
            && !self.animal.trim().is_empty()
            && !self.snack.trim().is_empty()
            && self.month.is_some()
    }

    /// Emit an immutable snapshot and clear the draft. None while invalid.
    pub fn take_responses(&mut self) -> Option<UserResponses> {
        if !self.is_valid() {
            return None;
        }

        let month = MONTHS[self.month?].to_string();
        let responses = UserResponses {
            favorite_color: self.color.trim().to_string(),
            favorite_animal: self.animal.trim().to_string(),
            favorite_snack: self.snack.trim().to_string(),
            birth_month: month,
        };

        *self = FormState::new();
        Some(responses)
    }
}

/* ---------- processing log ---------- */

#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warn,
    Error,
}

#[derive(Clone, Debug)]
pub struct LogLine {
    pub level: LogLevel,
    pub text: String,
    pub stamp: String,
}

/* ---------- app state ---------- */

pub struct AppState {
    pub phase: Phase,

    /// Incremented on reset. Worker results carrying a stale session
    /// are discarded, so a response landing after reset cannot clobber
    /// the new enrollment.
    pub session: u64,

    /* enrollment data */
    pub responses: Option<UserResponses>,
    pub profile: Option<AgentProfile>,
    pub error: Option<String>,

    /* delayed error-banner transition */
    pub pending: Option<(Phase, Instant)>,

    /* screens */
    pub form: FormState,
    pub scan: ScanSim,
    pub key_input: String,

    /* processing log ticker */
    pub logs: VecDeque<LogLine>,
    pub log_cursor: usize,
    pub next_log_at: Option<Instant>,

    /* ui */
    pub spinner_tick: usize,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            session: 0,
            responses: None,
            profile: None,
            error: None,
            pending: None,
            form: FormState::new(),
            scan: ScanSim::new(),
            key_input: String::new(),
            logs: VecDeque::new(),
            log_cursor: 0,
            next_log_at: None,
            spinner_tick: 0,
            should_exit: false,
        }
    }
}
