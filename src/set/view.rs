//! Read-only borrowed view of an [`IntSet`].

use super::arena::{NodeArena, NodeIndex};
use super::cursor::Iter;
use super::int_set::IntSet;

/// A read-only view of an [`IntSet`].
///
/// `union` and `intersection` take their right-hand operand as a view, so the
/// operand can only be read and its nodes can only be copied, never relinked.
/// A view is `Copy` and borrows its set for `'a`.
///
/// # Examples
///
/// ```rust
/// use intset::{IntSet, IntSetView};
///
/// let set = IntSet::try_from(&[3, 1, 2][..]).unwrap();
/// let view = IntSetView::from(&set);
///
/// assert_eq!(view.len(), 3);
/// assert!(view.contains(2));
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy)]
pub struct IntSetView<'a> {
    arena: &'a NodeArena,
    head: Option<NodeIndex>,
    length: usize,
}

impl<'a> IntSetView<'a> {
    pub(crate) const fn new(arena: &'a NodeArena, head: Option<NodeIndex>, length: usize) -> Self {
        Self {
            arena,
            head,
            length,
        }
    }

    /// Returns the number of elements in the viewed set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the viewed set has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `value` is in the viewed set.
    ///
    /// Stops at the first element greater than `value`.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.iter()
            .take_while(|element| *element <= value)
            .any(|element| element == value)
    }

    /// Returns an ascending iterator over the viewed set.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'a> {
        Iter::new(self.arena, self.head, self.length)
    }
}

impl<'a> From<&'a IntSet> for IntSetView<'a> {
    #[inline]
    fn from(set: &'a IntSet) -> Self {
        set.view()
    }
}

impl<'a> IntoIterator for IntSetView<'a> {
    type Item = i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for IntSetView<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}
