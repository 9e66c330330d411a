//! Elapsed-time collaborator for the simulation loop.
//!
//! The timer has no bearing on route computation; it only tracks how long a
//! drill has been running and is reset together with the hazard overlay.

use std::time::{Duration, Instant};

/// Simple start/stop elapsed timer.
#[derive(Debug, Default)]
pub struct DrillTimer {
    started: Option<Instant>,
    accumulated: Duration,
}

impl DrillTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. No-op when already running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stop counting, retaining the elapsed total.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Stop and zero the timer.
    pub fn reset(&mut self) {
        self.started = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Total elapsed time, including the in-flight interval when running.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time rendered as `mm:ss`.
    pub fn display(&self) -> String {
        let total = self.elapsed().as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
