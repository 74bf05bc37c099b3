//! scan.rs
//!
//! Biometric scan simulator. A pacing gate only: no data is read or
//! produced. Progress runs 0 to 100 in fixed steps on a fixed cadence,
//! holds briefly at 100, then signals completion exactly once.

use std::time::{Duration, Instant};

const STEP: u8 = 2;
const STEP_CADENCE: Duration = Duration::from_millis(50);
const COMPLETE_HOLD: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct ScanSim {
    progress: u8,
    next_step_at: Option<Instant>,
    complete_at: Option<Instant>,
    signaled: bool,
}

impl ScanSim {
    pub fn new() -> Self {
        Self {
            progress: 0,
            next_step_at: None,
            complete_at: None,
            signaled: false,
        }
    }

    /// Once started the scan runs to completion; restarting is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.next_step_at.is_none() && self.complete_at.is_none() && !self.signaled {
            self.next_step_at = Some(now + STEP_CADENCE);
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_step_at.is_some() || self.complete_at.is_some()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Advance the simulation. Returns true exactly once, when the
    /// post-completion hold has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.signaled {
            return false;
        }

        while let Some(at) = self.next_step_at {
            if now < at {
                break;
            }
            self.progress = (self.progress + STEP).min(100);
            if self.progress >= 100 {
                self.next_step_at = None;
                self.complete_at = Some(at + COMPLETE_HOLD);
            } else {
                self.next_step_at = Some(at + STEP_CADENCE);
            }
        }

        if let Some(done) = self.complete_at {
            if now >= done {
                self.signaled = true;
                self.complete_at = None;
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(scan: &mut ScanSim, t0: Instant) -> (Vec<u8>, usize) {
        let mut seen = Vec::new();
        let mut signals = 0;

        for ms in (0..10_000).step_by(25) {
            if scan.tick(t0 + Duration::from_millis(ms)) {
                signals += 1;
            }
            seen.push(scan.progress());
        }

        (seen, signals)
    }

    #[test]
    fn idle_until_started() {
        let t0 = Instant::now();
        let mut scan = ScanSim::new();
        assert!(!scan.tick(t0 + Duration::from_secs(60)));
        assert_eq!(scan.progress(), 0);
        assert!(!scan.is_running());
    }

    #[test]
    fn progress_is_monotonic_and_reaches_100() {
        let t0 = Instant::now();
        let mut scan = ScanSim::new();
        scan.start(t0);

        let (seen, signals) = run_to_completion(&mut scan, t0);

        assert_eq!(seen.first(), Some(&0));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last(), Some(&100));
        assert_eq!(signals, 1);
    }

    #[test]
    fn signals_exactly_once() {
        let t0 = Instant::now();
        let mut scan = ScanSim::new();
        scan.start(t0);

        let (_, signals) = run_to_completion(&mut scan, t0);
        assert_eq!(signals, 1);

        // long after completion, no further signal
        assert!(!scan.tick(t0 + Duration::from_secs(120)));
    }

    #[test]
    fn completion_waits_for_hold_after_100() {
        let t0 = Instant::now();
        let mut scan = ScanSim::new();
        scan.start(t0);

        // 50 steps of 2 at 50ms: progress hits 100 at t0 + 2500ms
        assert!(!scan.tick(t0 + Duration::from_millis(2500)));
        assert_eq!(scan.progress(), 100);

        assert!(!scan.tick(t0 + Duration::from_millis(3499)));
        assert!(scan.tick(t0 + Duration::from_millis(3500)));
    }

    #[test]
    fn restart_midway_is_a_noop() {
        let t0 = Instant::now();
        let mut scan = ScanSim::new();
        scan.start(t0);
        scan.tick(t0 + Duration::from_millis(500));
        let progress = scan.progress();

        scan.start(t0 + Duration::from_millis(500));
        scan.tick(t0 + Duration::from_millis(500));
        assert_eq!(scan.progress(), progress);
    }
}
