//! machine.rs
//!
//! Enrollment lifecycle state machine. All mutation of the view state
//! goes through the transition functions here, which keeps the flow
//! auditable and testable away from the renderer.

use std::time::{Duration, Instant};

use crate::llm::GenerateError;
use crate::scan::ScanSim;
use crate::state::{AgentProfile, AppState, FormState, Phase, UserResponses};

/// How long the error banner stays up before the delayed transition
/// out of Processing fires.
pub const ERROR_BANNER_DELAY: Duration = Duration::from_secs(3);

pub const ERR_CONNECTION: &str = "FAILED TO ESTABLISH AGENCY CONNECTION. RETRYING...";
pub const ERR_CREDENTIAL: &str = "AGENCY CREDENTIAL REJECTED. RE-AUTHENTICATION REQUIRED.";

/// KeyRequired -> Input, once a usable credential exists.
pub fn credential_accepted(state: &mut AppState) {
    if state.phase != Phase::KeyRequired {
        return;
    }
    state.error = None;
    transition(state, Phase::Input);
}

/// Input -> Scan. No-op while the form is invalid.
pub fn submit_input(state: &mut AppState) {
    if state.phase != Phase::Input {
        return;
    }

    let responses = match state.form.take_responses() {
        Some(r) => r,
        None => return,
    };

    state.responses = Some(responses);
    state.error = None;
    state.scan = ScanSim::new();
    transition(state, Phase::Scan);
}

/// Scan -> Processing, once the scan simulator has signaled. Returns the
/// session token and the record to generate from; the caller hands both
/// to the generation worker. Gating here is what guarantees at most one
/// request in flight.
pub fn begin_processing(state: &mut AppState, now: Instant) -> Option<(u64, UserResponses)> {
    if state.phase != Phase::Scan {
        return None;
    }
    let responses = state.responses.clone()?;

    state.logs.clear();
    state.log_cursor = 0;
    state.next_log_at = Some(now);
    transition(state, Phase::Processing);

    Some((state.session, responses))
}

/// Processing -> Result.
pub fn generation_succeeded(state: &mut AppState, session: u64, profile: AgentProfile) {
    if session != state.session || state.phase != Phase::Processing {
        return;
    }

    state.next_log_at = None;
    state.profile = Some(profile);
    state.error = None;
    transition(state, Phase::Result);
}

/// Processing -> KeyRequired (credential failures) or -> Input (anything
/// else), both after a fixed banner delay. Never leaves the app stuck in
/// Processing.
pub fn generation_failed(state: &mut AppState, session: u64, err: &GenerateError, now: Instant) {
    if session != state.session || state.phase != Phase::Processing {
        return;
    }

    state.next_log_at = None;
    state.responses = None;

    let next = if err.needs_credential() {
        state.error = Some(ERR_CREDENTIAL.to_string());
        Phase::KeyRequired
    } else {
        state.error = Some(ERR_CONNECTION.to_string());
        Phase::Input
    };

    state.pending = Some((next, now + ERROR_BANNER_DELAY));
}

/// Fire a delayed transition once its deadline passes. The banner text
/// stays up on the destination screen until the next successful
/// transition clears it.
pub fn tick_pending(state: &mut AppState, now: Instant) {
    let (next, at) = match state.pending {
        Some(p) => p,
        None => return,
    };

    if now < at {
        return;
    }

    state.pending = None;
    transition(state, next);
}

/// Result -> Input. Clears everything the enrollment produced and bumps
/// the session token so a still-in-flight response gets discarded.
pub fn reset(state: &mut AppState) {
    if state.phase != Phase::Result {
        return;
    }

    state.session += 1;
    state.responses = None;
    state.profile = None;
    state.error = None;
    state.pending = None;
    state.form = FormState::new();
    state.scan = ScanSim::new();
    state.logs.clear();
    state.log_cursor = 0;
    state.next_log_at = None;

    transition(state, Phase::Input);
}

fn transition(state: &mut AppState, next: Phase) {
    state.phase = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, FormState};

    fn state_with_form() -> AppState {
        let mut state = AppState::new(Phase::Input);
        state.form = FormState {
            color: "blue".into(),
            animal: "shark".into(),
            snack: "popcorn".into(),
            month: Some(0),
            focus: Field::Color,
        };
        state
    }

    fn profile() -> AgentProfile {
        AgentProfile {
            full_name: "Luna Lockheart".into(),
            last_name: "Lockheart".into(),
            rank: "Cyber-Sentinel".into(),
            specialty: "Hydro Reconnaissance".into(),
            last_known_location: "Tokyo".into(),
            clearance_level: 4,
        }
    }

    fn run_to_processing(state: &mut AppState, now: Instant) -> (u64, UserResponses) {
        submit_input(state);
        assert_eq!(state.phase, Phase::Scan);
        begin_processing(state, now).expect("responses were carried forward")
    }

    #[test]
    fn valid_submit_forwards_exact_record() {
        let mut state = state_with_form();
        submit_input(&mut state);

        assert_eq!(state.phase, Phase::Scan);
        let responses = state.responses.as_ref().unwrap();
        assert_eq!(responses.favorite_color, "blue");
        assert_eq!(responses.favorite_animal, "shark");
        assert_eq!(responses.favorite_snack, "popcorn");
        assert_eq!(responses.birth_month, "January");
    }

    #[test]
    fn invalid_submit_is_a_noop() {
        let mut state = state_with_form();
        state.form.animal = "  ".into();

        submit_input(&mut state);

        assert_eq!(state.phase, Phase::Input);
        assert!(state.responses.is_none());
    }

    #[test]
    fn processing_requires_scan_phase_and_responses() {
        let now = Instant::now();

        let mut state = AppState::new(Phase::Input);
        assert!(begin_processing(&mut state, now).is_none());

        state.phase = Phase::Scan;
        assert!(begin_processing(&mut state, now).is_none());
        assert_eq!(state.phase, Phase::Scan);
    }

    #[test]
    fn success_reaches_result_with_profile() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);

        generation_succeeded(&mut state, session, profile());

        assert_eq!(state.phase, Phase::Result);
        assert_eq!(state.profile.as_ref().unwrap().full_name, "Luna Lockheart");
        assert!(state.error.is_none());
    }

    #[test]
    fn stale_session_result_is_discarded() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);

        state.session += 1; // as if the user reset mid-flight

        generation_succeeded(&mut state, session, profile());
        assert_eq!(state.phase, Phase::Processing);
        assert!(state.profile.is_none());

        generation_failed(&mut state, session, &GenerateError::CredentialRequired, now);
        assert!(state.pending.is_none());
    }

    #[test]
    fn invalid_credential_returns_to_key_screen_after_delay() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);

        let err = GenerateError::InvalidCredential("Requested entity was not found".into());
        generation_failed(&mut state, session, &err, now);

        assert_eq!(state.phase, Phase::Processing);
        assert_eq!(state.error.as_deref(), Some(ERR_CREDENTIAL));

        tick_pending(&mut state, now + Duration::from_millis(2999));
        assert_eq!(state.phase, Phase::Processing);

        tick_pending(&mut state, now + ERROR_BANNER_DELAY);
        assert_eq!(state.phase, Phase::KeyRequired);
        // banner survives the transition so the user sees why
        assert_eq!(state.error.as_deref(), Some(ERR_CREDENTIAL));
    }

    #[test]
    fn generic_failure_returns_to_input_with_clean_slate() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);

        let err = GenerateError::Generation("malformed profile JSON".into());
        generation_failed(&mut state, session, &err, now);

        assert_eq!(state.error.as_deref(), Some(ERR_CONNECTION));
        assert!(state.responses.is_none());
        assert!(state.profile.is_none());

        tick_pending(&mut state, now + ERROR_BANNER_DELAY);
        assert_eq!(state.phase, Phase::Input);
    }

    #[test]
    fn resubmitting_clears_previous_error_banner() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);

        generation_failed(
            &mut state,
            session,
            &GenerateError::Generation("boom".into()),
            now,
        );
        tick_pending(&mut state, now + ERROR_BANNER_DELAY);
        assert_eq!(state.phase, Phase::Input);

        state.form = state_with_form().form;
        submit_input(&mut state);
        assert!(state.error.is_none());
    }

    #[test]
    fn reset_clears_everything_and_bumps_session() {
        let now = Instant::now();
        let mut state = state_with_form();
        let (session, _) = run_to_processing(&mut state, now);
        generation_succeeded(&mut state, session, profile());

        reset(&mut state);

        assert_eq!(state.phase, Phase::Input);
        assert!(state.responses.is_none());
        assert!(state.profile.is_none());
        assert!(state.error.is_none());
        assert!(state.logs.is_empty());
        assert_eq!(state.session, session + 1);
    }

    #[test]
    fn reset_only_applies_from_result() {
        let mut state = state_with_form();
        reset(&mut state);
        assert_eq!(state.phase, Phase::Input);
        assert_eq!(state.session, 0);
    }

    #[test]
    fn credential_accepted_only_applies_from_key_screen() {
        let mut state = AppState::new(Phase::KeyRequired);
        state.error = Some(ERR_CREDENTIAL.into());

        credential_accepted(&mut state);
        assert_eq!(state.phase, Phase::Input);
        assert!(state.error.is_none());

        let mut state = AppState::new(Phase::Result);
        credential_accepted(&mut state);
        assert_eq!(state.phase, Phase::Result);
    }
}
