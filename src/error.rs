//! Error types for integer sets.
//!
//! Two kinds of failure exist:
//!
//! - [`AllocationError`]: node storage could not be obtained. Returned by every
//!   operation that links a new node into a set.
//! - [`CursorError`]: a token [`Cursor`](crate::set::Cursor) was used against a
//!   set it does not describe anymore.
//!
//! Membership queries never fail; absence is an ordinary `false`.

use std::collections::TryReserveError;

/// Represents a failure to obtain storage for a new node.
///
/// The operation that returns this error never leaves a half-linked node
/// behind: the node is allocated first and linked only on success.
///
/// # Examples
///
/// ```rust
/// use intset::{AllocationError, IntSet};
///
/// let mut set = IntSet::with_node_limit(1);
/// assert_eq!(set.insert(1), Ok(1));
/// assert_eq!(
///     set.insert(2),
///     Err(AllocationError::NodeLimitReached { limit: 1 })
/// );
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocator refused to grow the node storage.
    OutOfMemory(TryReserveError),
    /// The set already holds as many nodes as its configured limit.
    NodeLimitReached {
        /// The configured maximum number of live nodes.
        limit: usize,
    },
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfMemory(error) => {
                write!(formatter, "failed to allocate set node: {error}")
            }
            Self::NodeLimitReached { limit } => {
                write!(formatter, "failed to allocate set node: limit of {limit} nodes reached")
            }
        }
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfMemory(error) => Some(error),
            Self::NodeLimitReached { .. } => None,
        }
    }
}

impl From<TryReserveError> for AllocationError {
    fn from(error: TryReserveError) -> Self {
        Self::OutOfMemory(error)
    }
}

/// Represents a misuse of a token cursor.
///
/// # Examples
///
/// ```rust
/// use intset::{CursorError, IntSet};
///
/// let mut set = IntSet::new();
/// set.insert(7).unwrap();
///
/// let cursor = set.begin();
/// set.insert(8).unwrap();
/// assert_eq!(set.value_at(cursor), Err(CursorError::Stale));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor is the end marker and has no value or successor.
    End,
    /// The set was mutated after the cursor was produced.
    Stale,
    /// The cursor was produced by a different set.
    ForeignSet,
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::End => write!(formatter, "cursor is past the last element"),
            Self::Stale => write!(formatter, "cursor was invalidated by a mutation of its set"),
            Self::ForeignSet => write!(formatter, "cursor belongs to a different set"),
        }
    }
}

impl std::error::Error for CursorError {}
