#![forbid(unsafe_code)]

//! Per-element dirty state.

/// How much work an element needs on the next frame.
///
/// Ordered by severity. Marking an element only ever raises its state;
/// a completed render pass lowers it back to [`UpdateState::Clean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum UpdateState {
    /// Nothing changed since the last frame.
    #[default]
    Clean,
    /// Painted content changed (e.g. a recolor) but the shape did not.
    NewData,
    /// Position, size, anchor or children changed.
    Relayout,
}

impl UpdateState {
    #[inline]
    pub const fn is_dirty(self) -> bool {
        !matches!(self, Self::Clean)
    }

    /// The more severe of the two states.
    #[inline]
    #[must_use]
    pub fn raise(self, other: Self) -> Self {
        self.max(other)
    }
}
