//! Directional rune ranges used for cursors and selections.

/// A cursor or selection over rune offsets.
///
/// The anchor stays fixed while the head moves during selection extension.
/// `Region::new(1, 4)` is a forward selection whose head sits at 4;
/// `Region::new(4, 1)` covers the same text with the head at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Region {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Region {
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed region (cursor with no selection)
    pub const fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn begin(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn len(&self) -> usize {
        self.end() - self.begin()
    }

    /// Check if region is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Check if region is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// True if the two regions overlap or share a boundary point
    pub fn touches(&self, other: &Region) -> bool {
        self.begin() <= other.end() && other.begin() <= self.end()
    }

    /// Smallest region spanning both, with `self`'s direction.
    pub fn cover(&self, other: &Region) -> Region {
        let begin = self.begin().min(other.begin());
        let end = self.end().max(other.end());
        if self.is_reversed() {
            Region::new(end, begin)
        } else {
            Region::new(begin, end)
        }
    }

    /// Move both ends by a signed rune count.
    ///
    /// Callers only shift by the net change of edits that lie wholly before
    /// the region, so the result cannot go negative.
    pub fn shifted(&self, delta: isize) -> Region {
        Region::new(
            self.anchor.saturating_add_signed(delta),
            self.head.saturating_add_signed(delta),
        )
    }

    /// Extend selection to new head position
    pub fn extend_to(&self, head: usize) -> Region {
        Region::new(self.anchor, head)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.anchor, self.head)
    }
}

impl From<(usize, usize)> for Region {
    fn from((anchor, head): (usize, usize)) -> Self {
        Region::new(anchor, head)
    }
}
