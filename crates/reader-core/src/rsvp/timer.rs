use std::time::{Duration, Instant};

/// A scheduled single-word advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStep {
    pub generation: u64,
    pub due: Instant,
}

/// One-shot step scheduler with a single slot.
///
/// Scheduling replaces whatever was pending, so at most one step can ever
/// fire, and a cancelled step is gone before anything else is scheduled.
#[derive(Debug, Default)]
pub struct StepTimer {
    pending: Option<PendingStep>,
    generation: u64,
}

impl StepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) -> PendingStep {
        self.cancel();
        self.generation += 1;
        let step = PendingStep {
            generation: self.generation,
            due: now + delay,
        };
        self.pending = Some(step);
        step
    }

    pub fn cancel(&mut self) -> Option<PendingStep> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingStep> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending step is due; zero once overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|step| step.due.saturating_duration_since(now))
    }

    /// Consumes the pending step if it is due at `now`.
    pub fn fire(&mut self, now: Instant) -> Option<PendingStep> {
        match self.pending {
            Some(step) if step.due <= now => self.pending.take(),
            _ => None,
        }
    }
}
