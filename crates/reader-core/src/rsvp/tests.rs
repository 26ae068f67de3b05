use std::time::{Duration, Instant};

use crate::library::{Library, LibraryStore, MemoryStorage};
use crate::types::EntryId;

use super::{step_delay, PlaybackEngine, PlaybackState};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn library_with(content: &str) -> (Library<MemoryStorage>, EntryId) {
    let mut lib = Library::open(MemoryStorage::new());
    let id = lib.create("Sample", content, false).expect("create");
    (lib, id)
}

fn numbered_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i}")).collect()
}

#[test]
fn step_delay_follows_rate() {
    assert_eq!(step_delay(600), ms(100));
    assert_eq!(step_delay(60), ms(1000));
    assert_eq!(step_delay(1000), ms(60));
}

#[test]
fn five_word_scenario_plays_to_finish() {
    let (mut lib, id) = library_with("one two three four five");
    let mut engine = PlaybackEngine::new(600);
    engine.open(lib.get(&id).expect("entry"));
    assert_eq!(engine.state(), PlaybackState::Idle);

    let t0 = Instant::now();
    engine.toggle_play(t0);
    assert_eq!(engine.state(), PlaybackState::Playing);

    assert!(!engine.tick(t0 + ms(99), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 0);

    assert!(engine.tick(t0 + ms(100), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(lib.get(&id).expect("entry").last_index, 1);

    assert!(engine.tick(t0 + ms(200), &mut lib).expect("tick"));
    assert_eq!(engine.current_word(), "three");
    let p = engine.pivot();
    assert_eq!((p.before, p.pivot, p.after), ("th", "r", "ee"));

    assert!(engine.tick(t0 + ms(300), &mut lib).expect("tick"));
    let p = engine.pivot();
    assert_eq!((p.before, p.pivot, p.after), ("fo", "u", "r"));

    assert!(engine.tick(t0 + ms(400), &mut lib).expect("tick"));
    assert!(engine.tick(t0 + ms(500), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 5);
    assert_eq!(engine.state(), PlaybackState::Finished);
    assert!(!engine.has_pending_step());
    assert_eq!(lib.get(&id).expect("entry").last_index, 5);

    assert!(!engine.tick(t0 + ms(5_000), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 5);
    assert!(engine.pivot().is_empty());
}

#[test]
fn play_at_end_or_on_empty_text_is_noop() {
    let t0 = Instant::now();
    let mut engine = PlaybackEngine::new(300);
    engine.toggle_play(t0);
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert!(!engine.has_pending_step());
    assert_eq!(engine.context_snippet(), "");
    assert!(engine.pivot().is_empty());

    engine.load_words(numbered_words(3), 3);
    assert_eq!(engine.state(), PlaybackState::Finished);
    engine.toggle_play(t0);
    assert_eq!(engine.state(), PlaybackState::Finished);
    assert!(!engine.has_pending_step());
}

#[test]
fn pause_cancels_pending_step() {
    let (mut lib, id) = library_with("a b c d");
    let mut engine = PlaybackEngine::new(600);
    engine.open(lib.get(&id).expect("entry"));

    let t0 = Instant::now();
    engine.toggle_play(t0);
    engine.toggle_play(t0 + ms(50));
    assert_eq!(engine.state(), PlaybackState::Paused);
    assert!(!engine.tick(t0 + ms(1_000), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn restart_resets_and_persists_zero() {
    let (mut lib, id) = library_with("one two three four");
    lib.update_progress(&id, 3).expect("progress");
    let mut engine = PlaybackEngine::new(600);
    engine.open(lib.get(&id).expect("entry"));
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.state(), PlaybackState::Paused);

    let t0 = Instant::now();
    engine.toggle_play(t0);
    engine.restart(&mut lib).expect("restart");
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.state(), PlaybackState::Idle);
    assert!(!engine.has_pending_step());
    assert_eq!(lib.get(&id).expect("entry").last_index, 0);
}

#[test]
fn skip_back_keeps_play_state_and_does_not_persist() {
    let (mut lib, id) = library_with(&numbered_words(40).join(" "));
    lib.update_progress(&id, 30).expect("progress");
    let mut engine = PlaybackEngine::new(600);
    engine.open(lib.get(&id).expect("entry"));

    let t0 = Instant::now();
    engine.toggle_play(t0);
    engine.skip_back(t0 + ms(60));
    assert_eq!(engine.current_index(), 5);
    assert_eq!(engine.state(), PlaybackState::Playing);
    assert_eq!(lib.get(&id).expect("entry").last_index, 30);

    // the pending step restarted from the skip
    assert!(!engine.tick(t0 + ms(100), &mut lib).expect("tick"));
    assert!(engine.tick(t0 + ms(160), &mut lib).expect("tick"));
    assert_eq!(engine.current_index(), 6);

    engine.pause();
    engine.skip_back(t0 + ms(200));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.state(), PlaybackState::Paused);
}

#[test]
fn skip_back_from_finished_rests_paused() {
    let mut engine = PlaybackEngine::new(300);
    engine.load_words(numbered_words(30), 30);
    assert_eq!(engine.state(), PlaybackState::Finished);

    engine.skip_back(Instant::now());
    assert_eq!(engine.current_index(), 5);
    assert_eq!(engine.state(), PlaybackState::Paused);
}

#[test]
fn rate_change_reschedules_pending_step() {
    let (mut lib, id) = library_with("a b c d e");
    let mut engine = PlaybackEngine::new(60);
    engine.open(lib.get(&id).expect("entry"));

    let t0 = Instant::now();
    engine.toggle_play(t0);
    assert_eq!(engine.time_until_next_step(t0), Some(ms(1_000)));

    engine.set_words_per_minute(600, t0 + ms(10));
    assert_eq!(engine.words_per_minute(), 600);
    assert_eq!(engine.time_until_next_step(t0 + ms(10)), Some(ms(100)));
    assert!(engine.tick(t0 + ms(110), &mut lib).expect("tick"));
}

#[test]
fn rate_is_clamped() {
    let t0 = Instant::now();
    let mut engine = PlaybackEngine::new(10);
    assert_eq!(engine.words_per_minute(), 50);
    engine.set_words_per_minute(5_000, t0);
    assert_eq!(engine.words_per_minute(), 1000);
    engine.adjust_words_per_minute(-2_000, t0);
    assert_eq!(engine.words_per_minute(), 50);
}

#[test]
fn open_clamps_stale_position() {
    let (mut lib, id) = library_with("one two");
    lib.update_progress(&id, 9).expect("progress");
    let mut engine = PlaybackEngine::new(300);
    engine.open(lib.get(&id).expect("entry"));
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.state(), PlaybackState::Finished);
}

#[test]
fn replacing_content_while_playing() {
    let mut engine = PlaybackEngine::new(600);
    engine.load_words(numbered_words(10), 6);
    let t0 = Instant::now();
    engine.toggle_play(t0);

    engine.replace_content("a b c d e f g h", t0 + ms(40));
    assert_eq!(engine.state(), PlaybackState::Playing);
    assert_eq!(engine.time_until_next_step(t0 + ms(40)), Some(ms(100)));

    engine.replace_content("a b c", t0 + ms(60));
    assert_eq!(engine.state(), PlaybackState::Finished);
    assert!(!engine.has_pending_step());
}

#[test]
fn close_cancels_session() {
    let (mut lib, id) = library_with("a b c");
    let mut engine = PlaybackEngine::new(600);
    engine.open(lib.get(&id).expect("entry"));
    let t0 = Instant::now();
    engine.toggle_play(t0);
    engine.close();

    assert!(engine.entry_id().is_none());
    assert!(!engine.tick(t0 + ms(500), &mut lib).expect("tick"));
    assert_eq!(lib.get(&id).expect("entry").last_index, 0);
}

#[test]
fn context_window_is_clamped() {
    let mut engine = PlaybackEngine::new(300);
    engine.load_words(numbered_words(10), 0);
    assert_eq!(engine.context_snippet(), "w0 w1 w2 w3 w4");

    engine.load_words(numbered_words(10), 5);
    assert_eq!(engine.context_snippet(), "w2 w3 w4 w5 w6 w7 w8 w9");

    engine.load_words(numbered_words(10), 9);
    assert_eq!(engine.context_snippet(), "w6 w7 w8 w9");
}

#[test]
fn progress_without_entry_is_not_persisted() {
    let (mut lib, id) = library_with("a b");
    let mut engine = PlaybackEngine::new(600);
    engine.load_words(numbered_words(2), 0);
    let t0 = Instant::now();
    engine.toggle_play(t0);
    assert!(engine.tick(t0 + ms(100), &mut lib).expect("tick"));
    assert_eq!(lib.get(&id).expect("entry").last_index, 0);
    assert_eq!(engine.progress(), 0.5);
}
