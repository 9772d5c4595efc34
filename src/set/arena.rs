//! Slot storage for the nodes of a single set.
//!
//! Every node of an [`IntSet`](super::IntSet) lives in one slot of a
//! [`NodeArena`]. Links between nodes are slot indices, so moving a node in or
//! out of the chain is a single index rewrite and releasing a node hands its
//! contents back to the caller by value.
//!
//! Released slots are threaded onto a free list and reused before the slot
//! vector grows.

use crate::error::AllocationError;

/// Index of an occupied slot.
pub(crate) type NodeIndex = usize;

/// A chain node: one value and the link to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) next: Option<NodeIndex>,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeIndex> },
}

/// Owning storage for the nodes of one set.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free: Option<NodeIndex>,
    live: usize,
    limit: Option<usize>,
}

impl NodeArena {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
            limit: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut arena = Self::new();
        arena.slots.try_reserve_exact(capacity)?;
        Ok(arena)
    }

    pub(crate) const fn with_limit(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
            limit: Some(limit),
        }
    }

    /// Builds a chain from values that are already strictly ascending.
    ///
    /// Slot `i` holds the `i`-th value and links to slot `i + 1`, so the head
    /// of the chain is slot 0. All slots are reserved up front; nothing is
    /// built when that fails.
    pub(crate) fn try_from_ascending<I>(
        values: I,
        limit: Option<usize>,
    ) -> Result<Self, AllocationError>
    where
        I: ExactSizeIterator<Item = i32>,
    {
        let length = values.len();
        let mut slots = Vec::new();
        slots.try_reserve_exact(length)?;
        slots.extend(values.enumerate().map(|(index, value)| {
            let next = (index + 1 < length).then_some(index + 1);
            Slot::Occupied(Node { value, next })
        }));
        Ok(Self {
            slots,
            free: None,
            live: length,
            limit,
        })
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn live(&self) -> usize {
        self.live
    }

    #[inline]
    pub(crate) const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Stores a new node and returns its index.
    ///
    /// Nothing is modified when this fails.
    pub(crate) fn allocate(
        &mut self,
        value: i32,
        next: Option<NodeIndex>,
    ) -> Result<NodeIndex, AllocationError> {
        if let Some(limit) = self.limit
            && self.live >= limit
        {
            return Err(AllocationError::NodeLimitReached { limit });
        }

        let node = Node { value, next };
        let index = match self.free {
            Some(index) => {
                let Slot::Vacant { next_free } = self.slots[index] else {
                    unreachable!("free list points at an occupied slot {index}");
                };
                self.free = next_free;
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.live += 1;
        Ok(index)
    }

    /// Releases the node at `index` and returns its contents.
    ///
    /// The caller owns the returned successor link from now on.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let Slot::Occupied(node) = std::mem::replace(&mut self.slots[index], vacant) else {
            unreachable!("released slot {index} twice");
        };
        self.free = Some(index);
        self.live -= 1;
        node
    }

    #[inline]
    pub(crate) fn node(&self, index: NodeIndex) -> &Node {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {index}"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {index}"),
        }
    }

    /// Drops every slot, occupied or not.
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_allocate_and_release_track_live_count() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(1, None).unwrap();
        let second = arena.allocate(2, Some(first)).unwrap();
        assert_eq!(arena.live(), 2);

        let node = arena.release(second);
        assert_eq!(node, Node { value: 2, next: Some(first) });
        assert_eq!(arena.live(), 1);
        assert_eq!(arena.node(first).value, 1);
    }

    #[rstest]
    fn test_released_slot_is_reused() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(1, None).unwrap();
        let _second = arena.allocate(2, None).unwrap();
        arena.release(first);

        let reused = arena.allocate(3, None).unwrap();
        assert_eq!(reused, first);
        assert_eq!(arena.node(reused).value, 3);
        assert_eq!(arena.slots.len(), 2);
    }

    #[rstest]
    fn test_free_list_is_lifo() {
        let mut arena = NodeArena::new();
        let indices: Vec<NodeIndex> = (0..3)
            .map(|value| arena.allocate(value, None).unwrap())
            .collect();
        arena.release(indices[0]);
        arena.release(indices[2]);

        assert_eq!(arena.allocate(10, None).unwrap(), indices[2]);
        assert_eq!(arena.allocate(11, None).unwrap(), indices[0]);
        assert_eq!(arena.allocate(12, None).unwrap(), 3);
    }

    #[rstest]
    fn test_limit_rejects_allocation_without_side_effects() {
        let mut arena = NodeArena::with_limit(1);
        arena.allocate(1, None).unwrap();

        let result = arena.allocate(2, None);
        assert_eq!(result, Err(AllocationError::NodeLimitReached { limit: 1 }));
        assert_eq!(arena.live(), 1);
        assert_eq!(arena.slots.len(), 1);
    }

    #[rstest]
    fn test_limit_counts_live_nodes_only() {
        let mut arena = NodeArena::with_limit(1);
        let index = arena.allocate(1, None).unwrap();
        arena.release(index);
        assert!(arena.allocate(2, None).is_ok());
    }

    #[rstest]
    fn test_with_capacity_reserves_slots() {
        let arena = NodeArena::with_capacity(16).unwrap();
        assert!(arena.slots.capacity() >= 16);
        assert_eq!(arena.live(), 0);
    }

    #[rstest]
    fn test_with_capacity_reports_overflow() {
        let result = NodeArena::with_capacity(usize::MAX);
        assert!(matches!(result, Err(AllocationError::OutOfMemory(_))));
    }

    #[rstest]
    fn test_node_mut_rewrites_link() {
        let mut arena = NodeArena::new();
        let first = arena.allocate(1, None).unwrap();
        let second = arena.allocate(2, None).unwrap();
        arena.node_mut(first).next = Some(second);
        assert_eq!(arena.node(first).next, Some(second));
    }

    #[rstest]
    fn test_from_ascending_links_consecutive_slots() {
        let arena = NodeArena::try_from_ascending([2, 4, 6].into_iter(), None).unwrap();
        assert_eq!(arena.live(), 3);
        assert_eq!(arena.node(0).next, Some(1));
        assert_eq!(arena.node(1).next, Some(2));
        assert_eq!(arena.node(2), &Node { value: 6, next: None });
    }

    /// Reports `claimed` remaining elements but yields none.
    struct ClaimedLength {
        claimed: usize,
    }

    impl Iterator for ClaimedLength {
        type Item = i32;

        fn next(&mut self) -> Option<Self::Item> {
            None
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.claimed, Some(self.claimed))
        }
    }

    impl ExactSizeIterator for ClaimedLength {}

    #[rstest]
    fn test_from_ascending_reports_reservation_failure() {
        let result = NodeArena::try_from_ascending(ClaimedLength { claimed: usize::MAX }, None);
        assert!(matches!(result, Err(AllocationError::OutOfMemory(_))));
    }

    #[rstest]
    fn test_from_ascending_keeps_limit() {
        let arena = NodeArena::try_from_ascending([1].into_iter(), Some(4)).unwrap();
        assert_eq!(arena.limit(), Some(4));
    }

    #[rstest]
    fn test_reset_empties_arena() {
        let mut arena = NodeArena::new();
        arena.allocate(1, None).unwrap();
        arena.reset();
        assert_eq!(arena.live(), 0);
        assert_eq!(arena.allocate(5, None).unwrap(), 0);
    }

    #[rstest]
    #[should_panic(expected = "released slot")]
    fn test_double_release_panics() {
        let mut arena = NodeArena::new();
        let index = arena.allocate(1, None).unwrap();
        arena.release(index);
        arena.release(index);
    }
}
