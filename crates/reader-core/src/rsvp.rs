//! Rapid serial visual presentation: one word at a time at a fixed pace.
//!
//! The engine never reads the clock itself. Callers pass `now` into every
//! time-dependent operation and call [`PlaybackEngine::tick`] from their
//! event loop; [`PlaybackEngine::time_until_next_step`] tells them how long
//! they may block.

mod engine;
mod pivot;
mod timer;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub use engine::PlaybackEngine;
pub use pivot::{pivot_offset, split_pivot, Pivot};
pub use timer::{PendingStep, StepTimer};

pub const MIN_WPM: u16 = 50;
pub const MAX_WPM: u16 = 1000;
pub const DEFAULT_WPM: u16 = 225;

/// Words moved back by a skip-back.
pub const SKIP_BACK_WORDS: usize = 25;

/// Words shown before and after the cursor in the context line.
pub const CONTEXT_BEFORE: usize = 3;
pub const CONTEXT_AFTER: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing loaded, or the cursor rests at the start.
    Idle,
    Playing,
    Paused,
    /// The cursor reached the end of the words.
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Ready",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Finished => "Finished",
        }
    }
}

pub fn clamp_wpm(wpm: u16) -> u16 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}

/// Delay between two words: `60 / wpm` seconds.
pub fn step_delay(wpm: u16) -> Duration {
    let wpm = u64::from(clamp_wpm(wpm));
    Duration::from_micros(60_000_000 / wpm)
}
