//! Cursor motion by rune and by stop (word, punctuation and line boundaries).
//!
//! A stop is an offset between two runes. Whether an offset is a stop depends
//! only on the classes of the rune before it and the rune after it, so the
//! scan walks offsets one at a time in the requested direction and returns the
//! first one that matches any requested class. Scans never wrap; when nothing
//! matches the destination is the buffer start or end.

use super::buffer::Buffer;
use crate::util::{char_type, CharType};

/// Which boundaries count as stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stops {
    /// Non-word to word transition
    pub word_begin: bool,
    /// Word to non-word transition
    pub word_end: bool,
    /// Non-punctuation to punctuation transition
    pub punct_begin: bool,
    /// Punctuation to non-punctuation transition
    pub punct_end: bool,
    pub line_begin: bool,
    pub line_end: bool,
    /// Offset that is both a line begin and a line end
    pub empty_line: bool,
}

impl Stops {
    pub fn is_empty(&self) -> bool {
        *self == Stops::default()
    }

    /// True if `offset` is one of the requested stops
    pub fn matches(&self, buffer: &Buffer, offset: usize) -> bool {
        let before = offset.checked_sub(1).and_then(|o| buffer.rune_at(o));
        let after = buffer.rune_at(offset);
        let is = |ch: Option<char>, class: CharType| ch.is_some_and(|c| char_type(c) == class);

        let line_begin = before.map_or(true, |c| c == '\n');
        let line_end = after.map_or(true, |c| c == '\n' || c == '\r');

        (self.word_begin && !is(before, CharType::WordChar) && is(after, CharType::WordChar))
            || (self.word_end && is(before, CharType::WordChar) && !is(after, CharType::WordChar))
            || (self.punct_begin
                && !is(before, CharType::Punctuation)
                && is(after, CharType::Punctuation))
            || (self.punct_end
                && is(before, CharType::Punctuation)
                && !is(after, CharType::Punctuation))
            || (self.line_begin && line_begin)
            || (self.line_end && line_end)
            || (self.empty_line && line_begin && line_end)
    }
}

/// One rune forward or backward, clamped to `[0, len]`
pub fn step(buffer: &Buffer, from: usize, forward: bool) -> usize {
    if forward {
        (from + 1).min(buffer.len())
    } else {
        from.saturating_sub(1)
    }
}

/// First stop strictly after (or before) `from`
pub fn next_stop(buffer: &Buffer, from: usize, forward: bool, stops: Stops) -> usize {
    let from = from.min(buffer.len());
    if forward {
        (from + 1..=buffer.len())
            .find(|&offset| stops.matches(buffer, offset))
            .unwrap_or(buffer.len())
    } else {
        (0..from)
            .rev()
            .find(|&offset| stops.matches(buffer, offset))
            .unwrap_or(0)
    }
}
