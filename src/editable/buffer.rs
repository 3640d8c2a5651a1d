//! Rune-addressed document text backed by `ropey::Rope`.
//!
//! Every offset counts Unicode scalar values, so `'𝄞'` occupies exactly one
//! offset unit just like `'a'`. The rope keeps its own line-break index, which
//! gives O(log n) row/column conversions after every insert or erase.
//!
//! Mutation goes through [`EditSession`](super::session::EditSession); the
//! primitives here are crate-private so no edit can escape the history.

use ropey::Rope;

use super::history::Edit;
use super::region::Region;
use crate::error::{EditError, Result};

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Length in runes
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Rune at `offset`, None past the end
    pub fn rune_at(&self, offset: usize) -> Option<char> {
        if offset < self.len() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    /// Text covered by `region`
    pub fn substr(&self, region: Region) -> Result<String> {
        self.check_span(region.begin(), region.len())?;
        Ok(self.rope.slice(region.begin()..region.end()).to_string())
    }

    /// Convert rune offset to (row, column), both 0-indexed
    pub fn row_col(&self, offset: usize) -> Result<(usize, usize)> {
        self.check_offset(offset)?;
        let row = self.rope.char_to_line(offset);
        Ok((row, offset - self.rope.line_to_char(row)))
    }

    /// Absolute offset of `row`/`col`.
    ///
    /// `col` is clamped to the line's length and `row` to the last line.
    pub fn text_point(&self, row: usize, col: usize) -> usize {
        let row = row.min(self.line_count() - 1);
        let start = self.rope.line_to_char(row);
        start + col.min(self.line_content_len(row))
    }

    /// Region spanning the line containing `offset`, without its terminator.
    pub fn line(&self, offset: usize) -> Result<Region> {
        let (row, _) = self.row_col(offset)?;
        let start = self.rope.line_to_char(row);
        Ok(Region::new(start, start + self.line_content_len(row)))
    }

    /// Region spanning the line containing `offset`, including its terminator.
    pub fn full_line(&self, offset: usize) -> Result<Region> {
        let (row, _) = self.row_col(offset)?;
        let start = self.rope.line_to_char(row);
        Ok(Region::new(start, start + self.rope.line(row).len_chars()))
    }

    /// Runes on `row`, excluding the line terminator
    fn line_content_len(&self, row: usize) -> usize {
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len == 0 || !is_line_break(line.char(len - 1)) {
            return len;
        }
        if len >= 2 && line.char(len - 1) == '\n' && line.char(len - 2) == '\r' {
            len - 2
        } else {
            len - 1
        }
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.len() {
            return Err(EditError::OutOfBounds {
                offset,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn check_span(&self, offset: usize, count: usize) -> Result<()> {
        match offset.checked_add(count) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(EditError::OutOfBounds {
                offset: offset.saturating_add(count),
                len: self.len(),
            }),
        }
    }

    /// Insert `text` at `offset`, returning the edit that was applied
    pub(crate) fn insert(&mut self, offset: usize, text: &str) -> Result<Edit> {
        self.check_offset(offset)?;
        self.rope.insert(offset, text);
        Ok(Edit::Insert {
            offset,
            text: text.to_string(),
        })
    }

    /// Erase `count` runes at `offset`, returning the edit that was applied
    pub(crate) fn erase(&mut self, offset: usize, count: usize) -> Result<Edit> {
        self.check_span(offset, count)?;
        let text = self.rope.slice(offset..offset + count).to_string();
        self.rope.remove(offset..offset + count);
        Ok(Edit::Erase { offset, text })
    }
}

/// Line terminators recognised by the rope's line index
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
