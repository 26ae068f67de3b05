//! Whitespace tokenizer shared by the library and the playback engine.
//!
//! Progress percentages and the playback cursor both index into the same
//! token sequence, so every caller goes through these functions.

/// Iterates the non-empty, whitespace-separated tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Owned token sequence for `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).map(str::to_string).collect()
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}
