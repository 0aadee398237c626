use std::iter::FusedIterator;

use crate::{
    error::TreeError,
    node::{Node, Occupied},
};

/// The order in which a [`TreeIter`] visits the nodes of a tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Each node is yielded before the nodes of its left subtree, which are
    /// yielded before those of its right subtree.
    Preorder,

    /// Items are yielded in ascending comparator order.
    #[default]
    Inorder,

    /// Each node is yielded after all nodes in both of its subtrees.
    Postorder,
}

#[derive(Debug)]
struct Frame<'a, T> {
    node: &'a Occupied<T>,

    /// Set once the children of `node` have been pushed onto the stack above
    /// it (postorder only).
    expanded: bool,
}

impl<'a, T> Frame<'a, T> {
    fn new(node: &'a Occupied<T>) -> Self {
        Self {
            node,
            expanded: false,
        }
    }
}

/// A lazy, depth-first walk over the items of an
/// [`AvlTree`](crate::AvlTree) in a given [`TraversalOrder`].
///
/// The walk holds at most O(height) node references at any one time. Once
/// exhausted it yields no further items; a new [`TreeIter`] must be obtained
/// to traverse the tree again.
///
/// ```
/// use avlset::{AvlTree, TraversalOrder, TreeError};
///
/// let mut t = AvlTree::new();
/// t.insert(2);
/// t.insert(1);
///
/// let mut iter = t.iter_order(TraversalOrder::Postorder);
/// assert_eq!(iter.peek(), Ok(&1));
/// assert_eq!(iter.try_next(), Ok(&1));
/// assert_eq!(iter.try_next(), Ok(&2));
/// assert_eq!(iter.try_next(), Err(TreeError::EnumerationExhausted));
/// ```
#[derive(Debug)]
pub struct TreeIter<'a, T> {
    order: TraversalOrder,
    stack: Vec<Frame<'a, T>>,

    /// The number of items not yet yielded.
    remaining: usize,
}

impl<'a, T> TreeIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>, order: TraversalOrder) -> Self {
        let mut this = Self {
            order,
            stack: vec![],
            remaining: root.size(),
        };

        let root = match root.occupied() {
            Some(v) => v,
            None => return this,
        };

        match order {
            TraversalOrder::Preorder => this.stack.push(Frame::new(root)),
            // Descend down the left side of the tree.
            TraversalOrder::Inorder => this.push_left_spine(root),
            TraversalOrder::Postorder => {
                this.stack.push(Frame::new(root));
                this.expand();
            }
        }

        this
    }

    /// The order this iterator visits nodes in.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns true if a subsequent call to [`TreeIter::try_next()`] will
    /// yield an item.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Return the item the next call to [`TreeIter::try_next()`] will yield,
    /// without advancing the iterator.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EnumerationExhausted`] if all items have been
    /// yielded.
    pub fn peek(&self) -> Result<&'a T, TreeError> {
        self.stack
            .last()
            .map(|v| v.node.payload())
            .ok_or(TreeError::EnumerationExhausted)
    }

    /// Advance the iterator, returning the next item.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EnumerationExhausted`] if all items have been
    /// yielded.
    pub fn try_next(&mut self) -> Result<&'a T, TreeError> {
        self.next().ok_or(TreeError::EnumerationExhausted)
    }

    fn push_left_spine(&mut self, subtree_root: &'a Occupied<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(Frame::new(v));
            ptr = v.left();
        }
    }

    /// Push the children of the top of the stack until the top is a node
    /// whose subtrees have all been yielded (or are pending beneath it).
    ///
    /// The right child is pushed before the left, so the deepest left-first
    /// node surfaces first.
    fn expand(&mut self) {
        while let Some(top) = self.stack.last_mut() {
            if top.expanded {
                break;
            }
            top.expanded = true;

            let n = top.node;
            for child in [n.right(), n.left()].into_iter().flatten() {
                self.stack.push(Frame::new(child));
            }
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?.node;

        match self.order {
            TraversalOrder::Preorder => {
                // Push the right child first, so the left subtree is visited
                // next.
                for child in [v.right(), v.left()].into_iter().flatten() {
                    self.stack.push(Frame::new(child));
                }
            }
            TraversalOrder::Inorder => {
                // Descend down the left side of the right hand child of this
                // node, if any.
                if let Some(right) = v.right() {
                    self.push_left_spine(right);
                }
            }
            TraversalOrder::Postorder => self.expand(),
        }

        self.remaining -= 1;
        Some(v.payload())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for TreeIter<'_, T> {}
impl<T> FusedIterator for TreeIter<'_, T> {}
