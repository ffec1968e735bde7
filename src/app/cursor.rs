//! Selection cursor over the filtered view.
//!
//! The cursor is a two-state machine parameterized by the current view length
//! `n`: [`SelectionCursor::Empty`] when there is nothing to select, and
//! [`SelectionCursor::Active`] holding an index in `0..n`. Navigation wraps in
//! both directions. The owner must call [`SelectionCursor::reset`] whenever it
//! replaces the view.

/// Index of the highlighted entry in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionCursor {
    /// The view is empty; navigation and activation are inert.
    #[default]
    Empty,
    /// Highlighting the entry at this index.
    Active(usize),
}

impl SelectionCursor {
    /// Cursor for a freshly computed view of length `len`.
    #[must_use]
    pub const fn reset(len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::Active(0)
        }
    }

    /// Moves one entry down, wrapping past the end to the first entry.
    #[must_use]
    pub const fn next(self, len: usize) -> Self {
        match self {
            Self::Active(i) if len > 0 => Self::Active((i + 1) % len),
            _ => self,
        }
    }

    /// Moves one entry up, wrapping below the first entry to the last.
    #[must_use]
    pub const fn prev(self, len: usize) -> Self {
        match self {
            Self::Active(i) if len > 0 => Self::Active((i + len - 1) % len),
            _ => self,
        }
    }

    /// Returns the highlighted index, if any.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Active(i) => Some(i),
        }
    }

    /// Returns the highlighted entry of `view`, if any.
    #[must_use]
    pub fn selected<T>(self, view: &[T]) -> Option<&T> {
        self.index().and_then(|i| view.get(i))
    }
}
