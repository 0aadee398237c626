use std::cmp::Ordering;

/// A three-way comparison defining the order of items within an
/// [`AvlTree`](crate::AvlTree).
///
/// Two items for which [`Comparator::compare()`] returns [`Ordering::Equal`]
/// are considered equivalent, and only one of them may be stored in a tree at
/// any one time.
///
/// Implementations must describe a total order that does not change while
/// items are stored in a tree.
pub trait Comparator<T> {
    /// Return the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// A [`Comparator`] that orders items by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the ordering of the wrapped [`Comparator`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
