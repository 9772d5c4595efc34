//! Traversal over the chain of an [`IntSet`](super::IntSet).
//!
//! Two ways to walk a set are provided:
//!
//! - [`Iter`], a borrowing iterator. While it is alive the set cannot be
//!   mutated, which the compiler enforces.
//! - [`Cursor`], a detached position token. It does not borrow the set, so the
//!   set stays mutable; instead every cursor remembers which set produced it
//!   and at which mutation generation, and the set rejects cursors that no
//!   longer describe it.

use std::iter::FusedIterator;

use super::arena::{NodeArena, NodeIndex};

/// Ascending iterator over the values of a set.
///
/// Created by [`IntSet::iter`](super::IntSet::iter) and
/// [`IntSetView::iter`](super::IntSetView::iter). Every call to `iter` starts a
/// fresh traversal from the smallest element.
#[derive(Clone)]
pub struct Iter<'a> {
    arena: &'a NodeArena,
    position: Option<NodeIndex>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) const fn new(
        arena: &'a NodeArena,
        head: Option<NodeIndex>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            position: head,
            remaining,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.position?;
        let node = self.arena.node(index);
        self.position = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

impl std::fmt::Debug for Iter<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// A detached position inside a set.
///
/// Obtained from [`IntSet::begin`](super::IntSet::begin) and advanced with
/// [`IntSet::step`](super::IntSet::step). A cursor is only meaningful for the
/// set that produced it and only until that set is next mutated; after that,
/// [`IntSet::value_at`](super::IntSet::value_at) and `step` report
/// [`CursorError::Stale`](crate::CursorError::Stale).
///
/// The end marker is a cursor for which [`is_end`](Self::is_end) is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) identity: u64,
    pub(crate) generation: u64,
    pub(crate) position: Option<NodeIndex>,
}

impl Cursor {
    /// Returns `true` if this cursor is past the last element.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.is_none()
    }
}
