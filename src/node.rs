use std::cmp::Ordering;

use crate::comparator::Comparator;

/// A subtree slot, either holding no item or an [`Occupied`] node.
///
/// An empty node is a terminal marker, and owns no children.
#[derive(Debug, Clone)]
pub(crate) enum Node<T> {
    Empty,
    Occupied(Box<Occupied<T>>),
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::Empty
    }
}

/// A node holding an item and two (possibly empty) child subtrees.
#[derive(Debug, Clone)]
pub(crate) struct Occupied<T> {
    /// Child subtrees, exclusively owned by this node.
    left: Node<T>,
    right: Node<T>,

    /// The height of the subtree rooted at this node.
    ///
    /// An empty node has a height of 0, and a leaf a height of 1.
    ///
    /// A u8 holds a maximum value of 255, far beyond the height of any tree
    /// that fits in memory.
    height: u8,

    /// The height of the right subtree minus the height of the left subtree.
    ///
    /// Always within -1..=1 outside of a mutation.
    balance: i8,

    /// The number of items in the subtree rooted at this node.
    size: usize,

    payload: T,
}

impl<T> Node<T> {
    pub(crate) fn leaf(payload: T) -> Self {
        Self::Occupied(Box::new(Occupied {
            left: Node::Empty,
            right: Node::Empty,
            height: 1,
            balance: 0,
            size: 1,
            payload,
        }))
    }

    pub(crate) fn occupied(&self) -> Option<&Occupied<T>> {
        match self {
            Self::Empty => None,
            Self::Occupied(v) => Some(v),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn height(&self) -> u8 {
        self.occupied().map(|v| v.height).unwrap_or_default()
    }

    pub(crate) fn size(&self) -> usize {
        self.occupied().map(|v| v.size).unwrap_or_default()
    }

    fn balance(&self) -> i8 {
        self.occupied().map(|v| v.balance).unwrap_or_default()
    }

    /// Consume this node, returning the item it holds (if any) and dropping
    /// any children.
    fn into_payload(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Occupied(v) => Some(v.payload),
        }
    }

    /// Insert `item` into the subtree rooted at `self`, rebalancing each node
    /// along the path back up to `self`.
    ///
    /// Returns false and leaves the subtree untouched if an equivalent item
    /// already exists.
    pub(crate) fn insert<C>(&mut self, item: T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        let n = match self {
            Self::Empty => {
                *self = Self::leaf(item);
                return true;
            }
            Self::Occupied(v) => v,
        };

        let child = match cmp.compare(&item, &n.payload) {
            Ordering::Less => &mut n.left,
            Ordering::Equal => {
                tracing::trace!(subtree_size = n.size, "rejecting duplicate item");
                return false;
            }
            Ordering::Greater => &mut n.right,
        };

        if !child.insert(item, cmp) {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        rebalance(n);
        true
    }

    /// Remove the item equivalent to `item` from the subtree rooted at `self`,
    /// returning it.
    ///
    /// Returns [`None`] without modifying the subtree if no equivalent item
    /// exists.
    pub(crate) fn remove<C>(&mut self, item: &T, cmp: &C) -> Option<T>
    where
        C: Comparator<T>,
    {
        let n = match self {
            Self::Empty => return None,
            Self::Occupied(v) => v,
        };

        let child = match cmp.compare(item, &n.payload) {
            Ordering::Less => &mut n.left,
            Ordering::Greater => &mut n.right,
            Ordering::Equal => return self.unlink(),
        };

        let removed = child.remove(item, cmp)?;
        rebalance(n);

        Some(removed)
    }

    /// Remove the item held in `self` from the tree, returning it.
    ///
    /// This node may have 0, 1 or 2 child node(s):
    ///
    /// ```text
    ///                          +----------+
    ///                          |  parent  |
    ///                          +----------+
    ///                                |
    ///                                v
    ///                          +----------+
    ///                     +----|   self   |----+
    ///                     |    +----------+    |
    ///                     |                    |
    ///                     v                    v
    ///               +-----------+       +------------+
    ///               | self.left |       | self.right |
    ///               +-----------+       +------------+
    /// ```
    ///
    /// If "self.right" is empty, the contents of "self.left" (possibly empty)
    /// move up to replace "self". If "self.left" is empty, "self.right" moves
    /// up instead.
    ///
    /// Otherwise the in-order successor of "self" (the minimum item in
    /// "self.right") is extracted from the right subtree and takes the place
    /// of the removed item, leaving the shape of "self" intact.
    fn unlink(&mut self) -> Option<T> {
        let n = match self {
            Self::Empty => return None,
            Self::Occupied(v) => v,
        };

        if n.right.is_empty() {
            let left = std::mem::take(&mut n.left);
            return std::mem::replace(self, left).into_payload();
        }

        if n.left.is_empty() {
            let right = std::mem::take(&mut n.right);
            return std::mem::replace(self, right).into_payload();
        }

        let Some(successor) = n.right.pop_min() else {
            unreachable!("occupied subtree has no minimum");
        };

        let old = std::mem::replace(&mut n.payload, successor);
        rebalance(n);

        Some(old)
    }

    /// Extract the minimum item in the subtree rooted at `self`, linking the
    /// right subtree of the extracted node in its place.
    ///
    /// ```text
    ///                 6
    ///                / \
    ///    here ->   <4>   7
    ///                \
    ///                 5
    /// ```
    fn pop_min(&mut self) -> Option<T> {
        let n = match self {
            Self::Empty => return None,
            Self::Occupied(v) => v,
        };

        if !n.left.is_empty() {
            let min = n.left.pop_min();
            rebalance(n);
            return min;
        }

        // The left-most node can only have a right child.
        let right = std::mem::take(&mut n.right);
        std::mem::replace(self, right).into_payload()
    }

    pub(crate) fn get<C>(&self, item: &T, cmp: &C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let mut ptr = self;

        while let Self::Occupied(n) = ptr {
            ptr = match cmp.compare(item, &n.payload) {
                Ordering::Less => &n.left,
                Ordering::Equal => return Some(&n.payload),
                Ordering::Greater => &n.right,
            };
        }

        None
    }

    pub(crate) fn get_mut<C>(&mut self, item: &T, cmp: &C) -> Option<&mut T>
    where
        C: Comparator<T>,
    {
        let n = match self {
            Self::Empty => return None,
            Self::Occupied(v) => v,
        };

        match cmp.compare(item, &n.payload) {
            Ordering::Less => n.left.get_mut(item, cmp),
            Ordering::Equal => Some(&mut n.payload),
            Ordering::Greater => n.right.get_mut(item, cmp),
        }
    }
}

impl<T> Occupied<T> {
    pub(crate) fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.occupied()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.occupied()
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn balance(&self) -> i8 {
        self.balance
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        self.size
    }
}

/// Recompute the cached height, balance factor and size of `n` from its
/// children.
fn refresh<T>(n: &mut Occupied<T>) {
    let (l, r) = (n.left.height(), n.right.height());

    n.height = l.max(r) + 1;
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    n.balance = (r as i16 - l as i16) as i8;
    n.size = n.left.size() + n.right.size() + 1;
}

/// Refresh `n` after one of its subtrees changed, and correct the balance of
/// the subtree rooted at `n` if the absolute difference in height between
/// branches reached 2.
fn rebalance<T>(n: &mut Box<Occupied<T>>) {
    refresh(n);

    match n.balance {
        // Left-heavy
        -2 if n.left.balance() <= 0 => {
            tracing::trace!(subtree_size = n.size, "zig rotation");
            zig(n);
        }
        -2 => {
            tracing::trace!(subtree_size = n.size, "zigzag rotation");
            zigzag(n);
        }
        // Right-heavy
        2 if n.right.balance() >= 0 => {
            tracing::trace!(subtree_size = n.size, "zag rotation");
            zag(n);
        }
        2 => {
            tracing::trace!(subtree_size = n.size, "zagzig rotation");
            zagzig(n);
        }
        -1..=1 => { /* The tree is well balanced */ }
        v => unreachable!("balance factor {v} outside of rebalance range"),
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(n.balance.abs() <= 1);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left child (cannot be rotated).
fn zig<T>(y: &mut Box<Occupied<T>>) {
    let Node::Occupied(mut p) = std::mem::take(&mut y.left) else {
        unreachable!("zig requires a left child");
    };
    std::mem::swap(y, &mut p);

    p.left = std::mem::take(&mut y.right);
    refresh(&mut p);

    y.right = Node::Occupied(p);
    refresh(y);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right child (cannot be rotated).
fn zag<T>(x: &mut Box<Occupied<T>>) {
    let Node::Occupied(mut p) = std::mem::take(&mut x.right) else {
        unreachable!("zag requires a right child");
    };
    std::mem::swap(x, &mut p);

    p.right = std::mem::take(&mut x.left);
    refresh(&mut p);

    x.left = Node::Occupied(p);
    refresh(x);
}

/// Left rotate the left child of `n`, then right rotate `n`.
fn zigzag<T>(n: &mut Box<Occupied<T>>) {
    match n.left {
        Node::Occupied(ref mut l) => zag(l),
        Node::Empty => unreachable!("zigzag requires a left child"),
    }
    zig(n);
}

/// Right rotate the right child of `n`, then left rotate `n`.
fn zagzig<T>(n: &mut Box<Occupied<T>>) {
    match n.right {
        Node::Occupied(ref mut r) => zig(r),
        Node::Empty => unreachable!("zagzig requires a right child"),
    }
    zag(n);
}
