//! # intset
//!
//! A mutable set of `i32` values backed by a sorted singly-linked list.
//!
//! ## Overview
//!
//! [`IntSet`] keeps its elements in strictly ascending order with no
//! duplicates, which turns union and intersection into single-pass merge walks
//! that mutate the receiver in place:
//!
//! - **Queries**: `len`, `is_empty`, `contains`, `first`, `last`
//! - **Insertion**: `insert`, `insert_multiple`
//! - **Merges**: `union` (copies missing values in), `intersection` (releases
//!   values not shared)
//! - **Traversal**: the borrowing `iter`, or detached [`Cursor`] tokens
//! - **Teardown**: `clear`, `destroy`
//!
//! Node storage exhaustion is reported as [`AllocationError`] and never leaves
//! a partially linked node behind.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`IntSet`] as an ascending sequence
//!
//! ## Example
//!
//! ```rust
//! use intset::prelude::*;
//!
//! let mut left = IntSet::try_from(&[1, 3, 5][..]).unwrap();
//! let right = IntSet::try_from(&[2, 3, 4][..]).unwrap();
//!
//! left.union(&right).unwrap();
//! assert_eq!(left.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use intset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::set::*;
}

pub mod error;
pub mod set;

pub use error::AllocationError;
pub use error::CursorError;
pub use set::Cursor;
pub use set::IntSet;
pub use set::IntSetView;
