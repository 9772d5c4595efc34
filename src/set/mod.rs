//! Sorted linked-list set of integers.
//!
//! - [`IntSet`]: the owned, mutable set
//! - [`IntSetView`]: a read-only borrowed view, used as the right-hand operand
//!   of [`IntSet::union`] and [`IntSet::intersection`]
//! - [`Iter`]: ascending borrowing iterator
//! - [`Cursor`]: detached position token checked against its set on every use
//!
//! # Examples
//!
//! ```rust
//! use intset::set::{IntSet, IntSetView};
//!
//! let mut left = IntSet::try_from(&[1, 2, 3][..]).unwrap();
//! let right = IntSet::new();
//!
//! // Intersecting with an empty set empties the receiver
//! assert_eq!(left.intersection(IntSetView::from(&right)), 0);
//! assert!(left.is_empty());
//! ```

mod arena;
mod cursor;
mod int_set;
mod view;

pub use cursor::Cursor;
pub use cursor::Iter;
pub use int_set::IntSet;
pub use view::IntSetView;
