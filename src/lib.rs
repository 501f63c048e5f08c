//! `interval_tree` is an ordered, in-memory collection of elements keyed by
//! byte-string ranges, built on an augmented left-leaning red-black tree.
//!
//! Elements implement [`Element`], reporting the [`Range`] they span and a
//! stable id; the tree keeps them sorted by `(start, id)` and supports
//! ordered traversal, floor/ceil lookups, and overlap queries that prune
//! whole subtrees through a cached per-node subtree extent. Mutations run in
//! `O(log n)`; a *fast* mutation mode skips extent maintenance for bulk
//! loads, to be settled by a single [`IntervalTree::adjust_ranges`] pass.
//!
//! Whether two ranges overlap is decided by a pluggable [`Overlapper`]; the
//! default [`ExclusiveOverlapper`] treats ranges as half-open `[start, end)`.
//!
//! # Example
//!
//! ```rust
//! use interval_tree::{Element, IntervalTree, Range};
//!
//! struct Reservation {
//!     span: Range,
//!     id: i64,
//! }
//!
//! impl Element for Reservation {
//!     fn range(&self) -> &Range {
//!         &self.span
//!     }
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! let mut tree = IntervalTree::new();
//! tree.insert(Reservation { span: Range::new(*b"a", *b"f"), id: 1 }, false).unwrap();
//! tree.insert(Reservation { span: Range::new(*b"d", *b"k"), id: 2 }, false).unwrap();
//! tree.insert(Reservation { span: Range::new(*b"p", *b"q"), id: 3 }, false).unwrap();
//!
//! let hits = tree.find_all_overlap(&Range::new(*b"e", *b"g"));
//! assert_eq!(hits.len(), 2);
//! ```

mod element;
mod error;
mod iter;
mod node;
mod overlap;
mod range;
mod tree;


pub use element::Element;
pub use error::InvertedRangeError;
pub use iter::Iter;
pub use overlap::{ExclusiveOverlapper, InclusiveOverlapper, Overlapper};
pub use range::{Comparable, Range};
pub use tree::{IntervalTree, Mode};
