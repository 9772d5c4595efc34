//! Mutable set of integers backed by a sorted singly-linked list.
//!
//! This module provides [`IntSet`], the only collection of the crate.
//!
//! # Overview
//!
//! An `IntSet` keeps its values in a singly-linked chain sorted in strictly
//! ascending order, together with a cached element count. Nodes are owned by
//! a per-set arena and linked by index; each node is reachable from exactly one
//! predecessor link (or from the head link).
//!
//! Union and intersection are in-place merge walks: a lagging cursor trails
//! through the receiver's chain while a second cursor walks the operand, and
//! each step splices in a copied value, unlinks a node, or advances.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `new`              | O(1)       |
//! | `len` / `is_empty` | O(1)       |
//! | `contains`         | O(n)       |
//! | `insert`           | O(n)       |
//! | `insert_multiple`  | O(k * n), O(n + k) for ascending input |
//! | `union`            | O(n + m)   |
//! | `intersection`     | O(n + m)   |
//! | `destroy`          | O(n)       |
//! | `iter`             | O(1) + O(n)|
//!
//! # Examples
//!
//! ```rust
//! use intset::IntSet;
//!
//! let mut set = IntSet::new();
//! set.insert_multiple([5, 1, 5, 3]).unwrap();
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
//!
//! let other = IntSet::try_from(&[2, 3, 4][..]).unwrap();
//! set.union(&other).unwrap();
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//!
//! set.intersection(&other);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::arena::{NodeArena, NodeIndex};
use super::cursor::{Cursor, Iter};
use super::view::IntSetView;
use crate::error::{AllocationError, CursorError};

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, AtomicOrdering::Relaxed)
}

/// The link slot a lagging cursor points at.
///
/// `Head` stands in front of the first node, so splicing and unlinking at the
/// front of the chain need no special case.
#[derive(Debug, Clone, Copy)]
enum Link {
    Head,
    After(NodeIndex),
}

/// A mutable set of `i32` values stored as a sorted singly-linked list.
///
/// Values are kept in strictly ascending order and the element count is
/// cached, so [`len`](Self::len) is O(1). The set is single-owner: it is
/// neither `Send` nor `Sync`, and operations that mutate it take `&mut self`.
///
/// Storage exhaustion is reported through [`AllocationError`]; an operation
/// never links a node whose allocation failed.
///
/// # Examples
///
/// ```rust
/// use intset::IntSet;
///
/// let mut set = IntSet::new();
/// assert_eq!(set.insert(42), Ok(1));
/// assert_eq!(set.insert(42), Ok(1));
/// assert!(set.contains(42));
/// ```
///
/// The borrow checker rejects mutation while an iterator is alive:
///
/// ```compile_fail
/// use intset::IntSet;
///
/// let mut set = IntSet::try_from(&[1, 2, 3][..]).unwrap();
/// for value in set.iter() {
///     set.insert(value + 10).unwrap();
/// }
/// ```
pub struct IntSet {
    arena: NodeArena,
    head: Option<NodeIndex>,
    length: usize,
    identity: u64,
    generation: u64,
    /// Marker to ensure `!Send` and `!Sync`.
    _marker: PhantomData<Rc<()>>,
}

static_assertions::assert_not_impl_any!(IntSet: Send, Sync);

impl IntSet {
    fn from_arena(arena: NodeArena) -> Self {
        Self {
            arena,
            head: None,
            length: 0,
            identity: next_identity(),
            generation: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a new empty set.
    ///
    /// No storage is reserved until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_arena(NodeArena::new())
    }

    /// Creates a new empty set with room for `capacity` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::OutOfMemory`] if the storage cannot be
    /// reserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::with_capacity(128).unwrap();
    /// assert_eq!(set.len(), 0);
    /// assert!(IntSet::with_capacity(usize::MAX).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        NodeArena::with_capacity(capacity).map(Self::from_arena)
    }

    /// Creates a new empty set that holds at most `limit` nodes at a time.
    ///
    /// Any insertion that would exceed the limit fails with
    /// [`AllocationError::NodeLimitReached`]. Nodes released by
    /// [`intersection`](Self::intersection) or [`clear`](Self::clear) count
    /// against the limit no longer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::{AllocationError, IntSet};
    ///
    /// let mut set = IntSet::with_node_limit(2);
    /// let result = set.insert_multiple([1, 2, 3]);
    /// assert_eq!(result, Err(AllocationError::NodeLimitReached { limit: 2 }));
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn with_node_limit(limit: usize) -> Self {
        Self::from_arena(NodeArena::with_limit(limit))
    }

    /// Builds a set from arbitrary values, ignoring duplicates.
    ///
    /// # Errors
    ///
    /// Returns the first [`AllocationError`] encountered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::try_from_iter([3, 1, 3, 2]).unwrap();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn try_from_iter<I>(values: I) -> Result<Self, AllocationError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut set = Self::new();
        set.insert_multiple(values)?;
        Ok(set)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if `value` is in the set.
    ///
    /// The walk stops at the first element greater than `value`.
    ///
    /// # Complexity
    ///
    /// O(n) worst case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::try_from(&[1, 3, 5][..]).unwrap();
    /// assert!(set.contains(3));
    /// assert!(!set.contains(4));
    /// ```
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.view().contains(value)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.head.map(|index| self.arena.node(index).value)
    }

    /// Returns the largest element, or `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.iter().last()
    }

    /// Adds `value` to the set and returns the number of elements afterwards.
    ///
    /// Inserting a value that is already present leaves the set unchanged.
    /// Otherwise the new node is linked right after the last node whose value
    /// is not greater than `value`.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if no node could be allocated; the set is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert_eq!(set.insert(2), Ok(1));
    /// assert_eq!(set.insert(1), Ok(2));
    /// assert_eq!(set.insert(2), Ok(2));
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<usize, AllocationError> {
        let mut lagging = Link::Head;
        while let Some(next) = self.successor(lagging) {
            match self.arena.node(next).value.cmp(&value) {
                Ordering::Less => lagging = Link::After(next),
                Ordering::Equal => return Ok(self.length),
                Ordering::Greater => break,
            }
        }
        self.splice_after(lagging, value)?;
        self.debug_check_invariants();
        Ok(self.length)
    }

    /// Inserts every value of `values`, in order.
    ///
    /// Returns the number of elements after the last insertion. Values greater
    /// than the current maximum are appended at the tail without a walk, so
    /// ascending input is inserted in linear time.
    ///
    /// # Errors
    ///
    /// Stops at the first failed insertion and returns its
    /// [`AllocationError`]. Values inserted before the failure stay in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let mut set = IntSet::new();
    /// assert_eq!(set.insert_multiple([5, 1, 5, 3]), Ok(3));
    /// assert_eq!(set.insert_multiple([]), Ok(3));
    /// ```
    pub fn insert_multiple<I>(&mut self, values: I) -> Result<usize, AllocationError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut tail = self.tail_link();
        let result = values
            .into_iter()
            .try_for_each(|value| self.insert_from_tail(&mut tail, value));
        self.debug_check_invariants();
        result.map(|()| self.length)
    }

    /// Returns a deep copy with its own nodes, a fresh identity and the same
    /// node limit.
    ///
    /// Cursors of the original are rejected by the copy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::OutOfMemory`] if the storage for the copy
    /// cannot be reserved. The original is never modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let original = IntSet::try_from(&[1, 2][..]).unwrap();
    /// let mut copy = original.try_clone().unwrap();
    /// copy.insert(3).unwrap();
    /// assert_eq!(original.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    pub fn try_clone(&self) -> Result<Self, AllocationError> {
        let arena = NodeArena::try_from_ascending(self.iter(), self.arena.limit())?;
        let mut copy = Self::from_arena(arena);
        copy.head = (self.length > 0).then_some(0);
        copy.length = self.length;
        Ok(copy)
    }

    /// Turns `self` into the union of `self` and `other`.
    ///
    /// `other` is only read. Values missing from `self` are copied into new
    /// nodes; no node is ever shared between the two sets. Returns the number
    /// of elements afterwards.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if a copy could not be allocated. The
    /// values merged before the failure stay in `self`, which remains a valid
    /// sorted set.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let mut left = IntSet::try_from(&[1, 3, 5][..]).unwrap();
    /// let right = IntSet::try_from(&[2, 3, 4][..]).unwrap();
    ///
    /// assert_eq!(left.union(&right), Ok(5));
    /// assert_eq!(left.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(right.len(), 3);
    /// ```
    pub fn union<'a>(&mut self, other: impl Into<IntSetView<'a>>) -> Result<usize, AllocationError> {
        let mut source = other.into().iter();
        let mut pending = source.next();
        let mut lagging = Link::Head;
        let mut inserted = 0_usize;

        while let (Some(value), Some(next)) = (pending, self.successor(lagging)) {
            match self.arena.node(next).value.cmp(&value) {
                Ordering::Less => lagging = Link::After(next),
                Ordering::Equal => {
                    lagging = Link::After(next);
                    pending = source.next();
                }
                Ordering::Greater => {
                    lagging = Link::After(self.splice_after(lagging, value)?);
                    inserted += 1;
                    pending = source.next();
                }
            }
        }

        // `self` is exhausted: everything left in `other` goes at the end.
        while let Some(value) = pending {
            lagging = Link::After(self.splice_after(lagging, value)?);
            inserted += 1;
            pending = source.next();
        }

        self.debug_check_invariants();
        tracing::trace!(inserted, len = self.length, "union merged");
        Ok(self.length)
    }

    /// Turns `self` into the intersection of `self` and `other`.
    ///
    /// `other` is only read. Nodes of `self` whose value is not in `other` are
    /// unlinked and released. This never allocates and therefore cannot fail.
    /// Returns the number of elements afterwards.
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let mut left = IntSet::try_from(&[1, 3, 5][..]).unwrap();
    /// let right = IntSet::try_from(&[2, 3, 4][..]).unwrap();
    ///
    /// assert_eq!(left.intersection(&right), 1);
    /// assert_eq!(left.iter().collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn intersection<'a>(&mut self, other: impl Into<IntSetView<'a>>) -> usize {
        let mut source = other.into().iter();
        let mut pending = source.next();
        let mut lagging = Link::Head;
        let mut released = 0_usize;

        while let (Some(value), Some(next)) = (pending, self.successor(lagging)) {
            match self.arena.node(next).value.cmp(&value) {
                Ordering::Less => {
                    self.unlink_after(lagging);
                    released += 1;
                }
                Ordering::Equal => {
                    lagging = Link::After(next);
                    pending = source.next();
                }
                Ordering::Greater => pending = source.next(),
            }
        }

        // `other` is exhausted: nothing past this point can match.
        while self.unlink_after(lagging).is_some() {
            released += 1;
        }

        self.debug_check_invariants();
        tracing::trace!(released, len = self.length, "intersection merged");
        self.length
    }

    /// Removes every element, keeping the set usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let mut set = IntSet::try_from(&[1, 2, 3][..]).unwrap();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.insert(4), Ok(1));
    /// ```
    pub fn clear(&mut self) {
        self.release_all();
    }

    /// Releases every node, then the set itself.
    ///
    /// Nodes are released in chain order. The set is consumed, so it cannot
    /// be used afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::try_from(&[1, 2, 3][..]).unwrap();
    /// set.destroy();
    /// ```
    pub fn destroy(mut self) {
        let released = self.release_all();
        tracing::trace!(released, "set destroyed");
    }

    /// Returns a read-only view of the set.
    #[inline]
    #[must_use]
    pub const fn view(&self) -> IntSetView<'_> {
        IntSetView::new(&self.arena, self.head, self.length)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::try_from(&[3, 1, 2][..]).unwrap();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.head, self.length)
    }

    /// Returns a cursor at the smallest element, or the end marker if the set
    /// is empty.
    ///
    /// Unlike [`iter`](Self::iter), the cursor does not borrow the set. It is
    /// invalidated by the next mutation of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intset::IntSet;
    ///
    /// let set = IntSet::try_from(&[10, 20][..]).unwrap();
    ///
    /// let mut values = Vec::new();
    /// let mut cursor = set.begin();
    /// while !cursor.is_end() {
    ///     values.push(set.value_at(cursor).unwrap());
    ///     cursor = set.step(cursor).unwrap();
    /// }
    /// assert_eq!(values, vec![10, 20]);
    /// ```
    #[must_use]
    pub const fn begin(&self) -> Cursor {
        Cursor {
            identity: self.identity,
            generation: self.generation,
            position: self.head,
        }
    }

    /// Returns the value at `cursor`.
    ///
    /// # Errors
    ///
    /// - [`CursorError::ForeignSet`] if `cursor` came from another set.
    /// - [`CursorError::Stale`] if the set was mutated since `cursor` was made.
    /// - [`CursorError::End`] if `cursor` is the end marker.
    pub fn value_at(&self, cursor: Cursor) -> Result<i32, CursorError> {
        let index = self.resolve(cursor)?;
        Ok(self.arena.node(index).value)
    }

    /// Returns the cursor following `cursor`, which is the end marker after
    /// the largest element.
    ///
    /// # Errors
    ///
    /// Same as [`value_at`](Self::value_at).
    pub fn step(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        let index = self.resolve(cursor)?;
        Ok(Cursor {
            position: self.arena.node(index).next,
            ..cursor
        })
    }

    fn resolve(&self, cursor: Cursor) -> Result<NodeIndex, CursorError> {
        if cursor.identity != self.identity {
            return Err(CursorError::ForeignSet);
        }
        if cursor.generation != self.generation {
            return Err(CursorError::Stale);
        }
        cursor.position.ok_or(CursorError::End)
    }

    // =========================================================================
    // Chain surgery
    // =========================================================================

    #[inline]
    fn successor(&self, link: Link) -> Option<NodeIndex> {
        match link {
            Link::Head => self.head,
            Link::After(index) => self.arena.node(index).next,
        }
    }

    #[inline]
    fn set_successor(&mut self, link: Link, next: Option<NodeIndex>) {
        match link {
            Link::Head => self.head = next,
            Link::After(index) => self.arena.node_mut(index).next = next,
        }
    }

    /// Allocates a node for `value` and links it right after `link`.
    fn splice_after(&mut self, link: Link, value: i32) -> Result<NodeIndex, AllocationError> {
        let next = self.successor(link);
        let index = match self.arena.allocate(value, next) {
            Ok(index) => index,
            Err(error) => {
                tracing::debug!(len = self.length, %error, "node allocation failed");
                return Err(error);
            }
        };
        self.set_successor(link, Some(index));
        self.length += 1;
        self.touch();
        Ok(index)
    }

    /// Returns the link of the last node, or `Head` for an empty set.
    fn tail_link(&self) -> Link {
        let mut link = Link::Head;
        while let Some(next) = self.successor(link) {
            link = Link::After(next);
        }
        link
    }

    /// Inserts `value`, appending it after `tail` when it exceeds every value.
    ///
    /// `tail` must be the link of the last node and is kept that way. Values
    /// that do not extend the chain go through [`insert`](Self::insert).
    fn insert_from_tail(&mut self, tail: &mut Link, value: i32) -> Result<(), AllocationError> {
        let extends = match *tail {
            Link::Head => self.head.is_none(),
            Link::After(index) => self.arena.node(index).value < value,
        };
        if extends {
            *tail = Link::After(self.splice_after(*tail, value)?);
        } else {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Unlinks and releases the node right after `link`, returning its value.
    fn unlink_after(&mut self, link: Link) -> Option<i32> {
        let index = self.successor(link)?;
        let node = self.arena.release(index);
        self.set_successor(link, node.next);
        self.length -= 1;
        self.touch();
        Some(node.value)
    }

    /// Releases the whole chain front to back and returns how many nodes went.
    fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut current = self.head.take();
        while let Some(index) = current {
            current = self.arena.release(index).next;
            released += 1;
        }
        self.length = 0;
        self.touch();
        debug_assert_eq!(self.arena.live(), 0, "{COUNT_INVARIANT_PANIC_MESSAGE}");
        self.arena.reset();
        released
    }

    #[inline]
    const fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert_eq!(self.length, self.arena.live(), "{COUNT_INVARIANT_PANIC_MESSAGE}");
        debug_assert!(
            is_strictly_ascending(self.iter()),
            "{SORTED_INVARIANT_PANIC_MESSAGE}"
        );
    }
}

impl Default for IntSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntSet {
    /// Returns a deep copy; see [`IntSet::try_clone`].
    ///
    /// # Panics
    ///
    /// Panics if the storage for the copy cannot be reserved. Use
    /// [`IntSet::try_clone`] to handle that case.
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|error| panic!("failed to clone IntSet: {error}"))
    }
}

impl TryFrom<&[i32]> for IntSet {
    type Error = AllocationError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        Self::try_from_iter(values.iter().copied())
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl Eq for IntSet {}

impl Hash for IntSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl std::fmt::Debug for IntSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IntSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct IntSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for IntSetVisitor {
    type Value = IntSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = IntSet::new();
        let mut tail = Link::Head;
        while let Some(value) = seq.next_element::<i32>()? {
            set.insert_from_tail(&mut tail, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        set.debug_check_invariants();
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntSetVisitor)
    }
}

const COUNT_INVARIANT_PANIC_MESSAGE: &str = "cached length must equal the number of live nodes";

const SORTED_INVARIANT_PANIC_MESSAGE: &str = "set values must be strictly increasing";

fn is_strictly_ascending(mut values: impl Iterator<Item = i32>) -> bool {
    let Some(mut previous) = values.next() else {
        return true;
    };
    values.all(|value| {
        let ascending = previous < value;
        previous = value;
        ascending
    })
}
