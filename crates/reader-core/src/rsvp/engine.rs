use std::time::{Duration, Instant};

use tracing::debug;

use crate::library::{LibraryResult, LibraryStore};
use crate::text::tokenize;
use crate::types::{EntryId, TextEntry};

use super::pivot::{split_pivot, Pivot};
use super::timer::StepTimer;
use super::{
    clamp_wpm, step_delay, PlaybackState, CONTEXT_AFTER, CONTEXT_BEFORE, SKIP_BACK_WORDS,
};

/// Playback state machine for one reading session.
pub struct PlaybackEngine {
    entry: Option<EntryId>,
    words: Vec<String>,
    current_index: usize,
    words_per_minute: u16,
    state: PlaybackState,
    timer: StepTimer,
}

impl PlaybackEngine {
    pub fn new(words_per_minute: u16) -> Self {
        Self {
            entry: None,
            words: Vec::new(),
            current_index: 0,
            words_per_minute: clamp_wpm(words_per_minute),
            state: PlaybackState::Idle,
            timer: StepTimer::new(),
        }
    }

    /// Starts a session on `entry`, resuming from its stored position.
    pub fn open(&mut self, entry: &TextEntry) {
        self.timer.cancel();
        self.entry = Some(entry.id.clone());
        self.words = tokenize(&entry.content);
        self.current_index = entry.last_index.min(self.words.len());
        self.state = resting_state(self.current_index, self.words.len());
        debug!(
            id = %entry.id,
            words = self.words.len(),
            index = self.current_index,
            "opened playback session"
        );
    }

    /// Loads bare words with no library entry behind them; progress is not persisted.
    pub fn load_words(&mut self, words: Vec<String>, start: usize) {
        self.timer.cancel();
        self.entry = None;
        self.words = words;
        self.current_index = start.min(self.words.len());
        self.state = resting_state(self.current_index, self.words.len());
    }

    pub fn close(&mut self) {
        self.timer.cancel();
        self.entry = None;
        self.words.clear();
        self.current_index = 0;
        self.state = PlaybackState::Idle;
    }

    pub fn entry_id(&self) -> Option<&EntryId> {
        self.entry.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn words_per_minute(&self) -> u16 {
        self.words_per_minute
    }

    pub fn has_pending_step(&self) -> bool {
        self.timer.is_pending()
    }

    /// Word under the cursor, empty once past the end.
    pub fn current_word(&self) -> &str {
        self.words
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn pivot(&self) -> Pivot<'_> {
        split_pivot(self.current_word())
    }

    /// Words around the cursor: three before it through four after it.
    pub fn context_snippet(&self) -> String {
        if self.words.is_empty() {
            return String::new();
        }
        let start = self.current_index.saturating_sub(CONTEXT_BEFORE);
        let end = (self.current_index + CONTEXT_AFTER).min(self.words.len());
        if start >= end {
            return String::new();
        }
        self.words[start..end].join(" ")
    }

    /// Fraction of words already shown, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        self.current_index.min(self.words.len()) as f64 / self.words.len() as f64
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Begins advancing. Does nothing when there is no word left to show.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            return true;
        }
        if self.current_index >= self.words.len() {
            return false;
        }
        self.state = PlaybackState::Playing;
        self.schedule_next(now);
        true
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.timer.cancel();
            self.state = PlaybackState::Paused;
        }
    }

    /// Rewinds to the first word and stores that position.
    pub fn restart<S: LibraryStore + ?Sized>(&mut self, store: &mut S) -> LibraryResult<()> {
        self.timer.cancel();
        self.current_index = 0;
        self.state = PlaybackState::Idle;
        if let Some(id) = &self.entry {
            store.update_progress(id, 0)?;
        }
        Ok(())
    }

    /// Moves back up to 25 words. Play state is kept and nothing is persisted.
    pub fn skip_back(&mut self, now: Instant) {
        let step = SKIP_BACK_WORDS.min(self.current_index);
        if step == 0 {
            return;
        }
        self.current_index -= step;
        match self.state {
            PlaybackState::Playing => self.schedule_next(now),
            PlaybackState::Finished if self.current_index < self.words.len() => {
                self.state = PlaybackState::Paused;
            }
            _ => {}
        }
    }

    /// Changes the rate; a pending step is rescheduled with the new delay.
    pub fn set_words_per_minute(&mut self, wpm: u16, now: Instant) {
        let wpm = clamp_wpm(wpm);
        if wpm == self.words_per_minute {
            return;
        }
        self.words_per_minute = wpm;
        if self.is_playing() {
            self.schedule_next(now);
        }
    }

    pub fn adjust_words_per_minute(&mut self, delta: i32, now: Instant) {
        let target = (i32::from(self.words_per_minute) + delta).clamp(0, i32::from(u16::MAX));
        self.set_words_per_minute(target as u16, now);
    }

    /// Swaps in new text for the open entry, keeping the cursor where it is.
    pub fn replace_content(&mut self, content: &str, now: Instant) {
        self.timer.cancel();
        self.words = tokenize(content);
        let len = self.words.len();
        match self.state {
            PlaybackState::Playing if self.current_index < len => self.schedule_next(now),
            PlaybackState::Playing => self.state = PlaybackState::Finished,
            PlaybackState::Finished if self.current_index < len => {
                self.state = PlaybackState::Paused;
            }
            _ if len == 0 => self.state = PlaybackState::Idle,
            _ if self.current_index >= len => self.state = PlaybackState::Finished,
            _ => {}
        }
    }

    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Fires the pending step if it is due: advances one word and stores the
    /// new position for the open entry. Returns whether the cursor moved.
    pub fn tick<S: LibraryStore + ?Sized>(
        &mut self,
        now: Instant,
        store: &mut S,
    ) -> LibraryResult<bool> {
        if !self.is_playing() || self.timer.fire(now).is_none() {
            return Ok(false);
        }
        self.current_index += 1;
        if self.current_index >= self.words.len() {
            self.state = PlaybackState::Finished;
            debug!(index = self.current_index, "playback finished");
        } else {
            self.schedule_next(now);
        }
        if let Some(id) = &self.entry {
            store.update_progress(id, self.current_index)?;
        }
        Ok(true)
    }

    fn schedule_next(&mut self, now: Instant) {
        self.timer.schedule(now, step_delay(self.words_per_minute));
    }
}

fn resting_state(index: usize, len: usize) -> PlaybackState {
    if len == 0 || index == 0 {
        PlaybackState::Idle
    } else if index >= len {
        PlaybackState::Finished
    } else {
        PlaybackState::Paused
    }
}
