//! An ordered set backed by a height-balanced (AVL) binary search tree.
//!
//! Items are ordered by a [`Comparator`], which defaults to the [`Ord`]
//! implementation of the item type ([`NaturalOrder`]) but may be any type
//! implementing the trait, including closures. Items the comparator reports
//! as [`Ordering::Equal`](std::cmp::Ordering::Equal) are duplicates, and are
//! rejected by [`AvlTree::insert()`].
//!
//! After each insertion or removal the nodes along the mutated path restore
//! the AVL balance property, bounding the height of a tree holding `n` items
//! to at most `1.44 * log2(n + 2)` and all operations to `O(log n)`.
//!
//! ```
//! use avlset::{AvlTree, TraversalOrder, TreeError};
//!
//! let mut t = AvlTree::new();
//!
//! for v in [5, 3, 8, 1, 4, 7, 9] {
//!     t.insert(v);
//! }
//!
//! assert_eq!(t.find(&4), Ok(4));
//! assert_eq!(t.find(&6), Err(TreeError::NotFound));
//!
//! assert!(t.remove(&5));
//! assert!(!t.contains(&5));
//!
//! let postorder = t
//!     .iter_order(TraversalOrder::Postorder)
//!     .copied()
//!     .collect::<Vec<_>>();
//! assert_eq!(postorder, [1, 4, 3, 9, 8, 7]);
//! ```
//!
//! Traversal is lazy, driven by an explicit stack of `O(height)` node
//! references rather than recursion. The borrow held by a [`TreeIter`]
//! prevents the tree from being mutated while it is in use.

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

mod comparator;
mod error;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use comparator::*;
pub use error::*;
pub use iter::{TraversalOrder, TreeIter};
pub use tree::*;
