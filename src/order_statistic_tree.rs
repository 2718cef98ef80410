use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec;
use tracing::{debug, trace};

use crate::Error;
use crate::raw::{RawIter, RawTree};

mod capacity;
mod order_statistic;

/// An ordered set of distinct values that can be read and removed by rank.
///
/// `OrderStatisticTree` is a plain (unbalanced) binary search tree whose nodes
/// also record the size of their subtree. That size lets every node work out
/// its own position in the ascending order, so lookup and removal by rank cost
/// one root-to-node descent instead of a full traversal.
///
/// No rebalancing is ever performed. Random insertion order gives a tree of
/// logarithmic expected height; inserting values in sorted order produces a
/// tree shaped like a linked list, and every operation then costs O(n). Use
/// [`height`](OrderStatisticTree::height) to observe the shape.
///
/// Inserting a value equal to one already present leaves the tree unchanged.
///
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other value, as determined by the [`Ord`] trait,
/// changes while it is in the tree. The behavior resulting from such a logic
/// error is not specified, but will be encapsulated to the tree that observed
/// it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use ost_tree::OrderStatisticTree;
///
/// let mut tree = OrderStatisticTree::new();
/// tree.insert("b");
/// tree.insert("a");
/// tree.insert("c");
///
/// // Values come back in ascending order.
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
///
/// // Lookup and removal are by zero-based rank.
/// assert_eq!(tree.get_by_rank(2), Ok(&"c"));
/// assert_eq!(tree.remove_by_rank(1), Ok("b"));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["a", "c"]);
/// ```
pub struct OrderStatisticTree<T> {
    raw: RawTree<T>,
}

/// An iterator over the values of an `OrderStatisticTree` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OrderStatisticTree`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use ost_tree::OrderStatisticTree;
///
/// let tree = OrderStatisticTree::from([3, 1, 2]);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderStatisticTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An owning iterator over the values of an `OrderStatisticTree` in ascending
/// order.
///
/// This `struct` is created by the [`into_iter`] method on
/// [`OrderStatisticTree`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: OrderStatisticTree#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> OrderStatisticTree<T> {
    /// Makes a new, empty `OrderStatisticTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new();
    /// tree.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> OrderStatisticTree<T> {
        OrderStatisticTree { raw: RawTree::new() }
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert("x");
    /// tree.insert("x");
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no values.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every value, dropping them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.raw.len(), "clearing order-statistic tree");
        self.raw.clear();
    }

    /// Returns the smallest value in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest value in the tree, if any.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Removes and returns the smallest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::from([2, 1]);
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(2));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.remove_by_rank(0)
    }

    /// Removes and returns the largest value in the tree.
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.raw.len().checked_sub(1)?;
        self.raw.remove_by_rank(last)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf,
    /// or zero for an empty tree.
    ///
    /// Since the tree never rebalances, this ranges from about `log2(len)` for
    /// random insertion order up to `len` for sorted insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let sorted: OrderStatisticTree<_> = (0..8).collect();
    /// assert_eq!(sorted.height(), 8);
    ///
    /// let shuffled = OrderStatisticTree::from([4, 2, 6, 1, 3, 5, 7]);
    /// assert_eq!(shuffled.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Gets an iterator that visits the values in ascending order.
    ///
    /// The iterator borrows the tree, so it can be recreated at any time to
    /// walk the values again.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let tree = OrderStatisticTree::from([3, 1, 2]);
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// assert_eq!(tree.iter().rev().next(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator; amortized O(1) per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: RawIter::new(&self.raw),
        }
    }
}

impl<T: Ord> OrderStatisticTree<T> {
    /// Adds a value to the tree.
    ///
    /// Returns whether the value was newly inserted. If an equal value is
    /// already present nothing changes, `false` is returned and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.raw.insert(value);
        if !inserted {
            trace!(len = self.raw.len(), "ignored insert of a value already present");
        }
        inserted
    }

    /// Adds a value to the tree, failing with [`Error::DuplicateValue`] if an
    /// equal value is already present. The tree is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::{Error, OrderStatisticTree};
    ///
    /// let mut tree = OrderStatisticTree::new();
    /// assert_eq!(tree.try_insert(5), Ok(()));
    /// assert_eq!(tree.try_insert(5), Err(Error::DuplicateValue));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), Error> {
        if self.insert(value) {
            Ok(())
        } else {
            Err(Error::DuplicateValue)
        }
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let tree = OrderStatisticTree::from([String::from("a")]);
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("b"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(value).is_some()
    }
}

impl<T: PartialEq> PartialEq for OrderStatisticTree<T> {
    fn eq(&self, other: &OrderStatisticTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderStatisticTree<T> {}

impl<T: Clone> Clone for OrderStatisticTree<T> {
    fn clone(&self) -> Self {
        OrderStatisticTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderStatisticTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderStatisticTree<T> {
    fn default() -> Self {
        OrderStatisticTree::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderStatisticTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderStatisticTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderStatisticTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OrderStatisticTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderStatisticTree<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderStatisticTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Moves the values out of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let tree = OrderStatisticTree::from([4, 1, 3, 2]);
    /// let v: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderStatisticTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.remaining();
        (remaining, Some(remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back_value()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `order_statistic_tree::IntoIter`.
    ///
    /// ```
    /// # use ost_tree::order_statistic_tree;
    /// let iter: order_statistic_tree::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: vec::IntoIter::default(),
        }
    }
}
