use std::fmt::Debug;

use crate::{
    comparator::{Comparator, NaturalOrder},
    error::TreeError,
    iter::{TraversalOrder, TreeIter},
    node::Node,
};

/// An ordered set of items, stored in a height-balanced (AVL) binary search
/// tree and ordered by the [`Comparator`] `C`.
///
/// Items the comparator reports as equivalent are duplicates, and at most one
/// of them is stored at any one time.
///
/// ```
/// use avlset::{AvlTree, TraversalOrder};
///
/// let mut t = AvlTree::new();
///
/// for v in [5, 3, 8, 1, 4, 7, 9] {
///     assert!(t.insert(v));
/// }
/// assert!(!t.insert(4));
///
/// assert_eq!(t.size(), 7);
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
/// assert_eq!(t.iter_order(TraversalOrder::Preorder).next(), Some(&5));
/// ```
#[derive(Clone)]
pub struct AvlTree<T, C = NaturalOrder> {
    root: Node<T>,
    comparator: C,
}

impl<T, C> Default for AvlTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Construct an empty tree ordering items by their [`Ord`]
    /// implementation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, C> AvlTree<T, C> {
    /// Construct an empty tree ordering items with `comparator`.
    ///
    /// ```
    /// use avlset::AvlTree;
    ///
    /// let mut t = AvlTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    ///
    /// assert!(t.insert("bananas"));
    /// assert!(!t.insert("platypi")); // Same length, so equivalent.
    /// assert!(t.replace("platypi"));
    ///
    /// assert_eq!(t.get(&"1234567"), Some(&"platypi"));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: Node::Empty,
            comparator,
        }
    }

    /// Returns the number of items in the tree.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// An alias for [`AvlTree::size()`].
    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the height of the tree, which is 0 when empty and 1 when it
    /// holds a single item.
    pub fn height(&self) -> usize {
        self.root.height() as usize
    }

    /// Remove all items from the tree.
    pub fn clear(&mut self) {
        self.root = Node::Empty;
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Return an iterator yielding references to all items in the tree, in
    /// ascending order.
    pub fn iter(&self) -> TreeIter<'_, T> {
        self.iter_order(TraversalOrder::Inorder)
    }

    /// Return an iterator yielding references to all items in the tree, in
    /// the specified traversal `order`.
    pub fn iter_order(&self, order: TraversalOrder) -> TreeIter<'_, T> {
        TreeIter::new(&self.root, order)
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Comparator<T>,
{
    /// Insert `item` into the tree, returning true if it was added.
    ///
    /// If an equivalent item is already present, the tree is left unchanged
    /// and false is returned.
    pub fn insert(&mut self, item: T) -> bool {
        self.root.insert(item, &self.comparator)
    }

    /// Overwrite the stored item equivalent to `item`, returning true if one
    /// was found.
    ///
    /// The shape of the tree is unchanged. If no equivalent item is present,
    /// `item` is dropped and false is returned.
    pub fn replace(&mut self, item: T) -> bool {
        match self.root.get_mut(&item, &self.comparator) {
            Some(v) => {
                *v = item;
                true
            }
            None => false,
        }
    }

    /// Remove the item equivalent to `item`, returning true if one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Remove the item equivalent to `item` from the tree, returning it.
    pub fn take(&mut self, item: &T) -> Option<T> {
        self.root.remove(item, &self.comparator)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.get(item).is_some()
    }

    /// Return a reference to the stored item equivalent to `item`, if any.
    pub fn get(&self, item: &T) -> Option<&T> {
        self.root.get(item, &self.comparator)
    }

    /// Return a copy of the stored item equivalent to `item`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no equivalent item exists.
    pub fn find(&self, item: &T) -> Result<T, TreeError>
    where
        T: Clone,
    {
        self.get(item).cloned().ok_or(TreeError::NotFound)
    }
}

impl<T, C> Debug for AvlTree<T, C>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
