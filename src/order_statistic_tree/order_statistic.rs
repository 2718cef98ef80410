use core::borrow::Borrow;
use core::ops::Index;

use tracing::trace;

use super::OrderStatisticTree;
use crate::{Error, Rank};

impl<T> OrderStatisticTree<T> {
    /// Returns the value at position `rank` in ascending order.
    ///
    /// The rank is zero-based: rank 0 is the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `rank >= self.len()`, which
    /// includes every rank on an empty tree.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::{Error, OrderStatisticTree};
    ///
    /// let tree = OrderStatisticTree::from([10, 30, 20]);
    /// assert_eq!(tree.get_by_rank(1), Ok(&20));
    /// assert_eq!(tree.get_by_rank(3), Err(Error::IndexOutOfRange { rank: 3, len: 3 }));
    /// ```
    pub fn get_by_rank(&self, rank: usize) -> Result<&T, Error> {
        self.raw.get_by_rank(rank).ok_or_else(|| self.out_of_range(rank))
    }

    /// Removes and returns the value at position `rank` in ascending order.
    ///
    /// The values above `rank` each move down one position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `rank >= self.len()`. The tree is
    /// left untouched in that case.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::from(["b", "a", "c"]);
    /// assert_eq!(tree.remove_by_rank(1), Ok("b"));
    /// assert_eq!(tree.get_by_rank(1), Ok(&"c"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove_by_rank(&mut self, rank: usize) -> Result<T, Error> {
        match self.raw.remove_by_rank(rank) {
            Some(value) => Ok(value),
            None => Err(self.out_of_range(rank)),
        }
    }

    fn out_of_range(&self, rank: usize) -> Error {
        let len = self.raw.len();
        trace!(rank, len, "rejected out-of-range rank");
        Error::IndexOutOfRange { rank, len }
    }
}

impl<T: Ord> OrderStatisticTree<T> {
    /// Returns the zero-based rank of `value` in ascending order, or `None` if
    /// the value is not present.
    ///
    /// This is the inverse of [`get_by_rank`](Self::get_by_rank).
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let tree = OrderStatisticTree::from([10, 20]);
    ///
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(value)
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ost_tree::{OrderStatisticTree, Rank};
///
/// let tree = OrderStatisticTree::from([10, 20, 30]);
/// assert_eq!(tree[Rank(1)], 20);
/// ```
impl<T> Index<Rank> for OrderStatisticTree<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.get_by_rank(rank.0) {
            Ok(value) => value,
            Err(error) => panic!("index out of bounds: {error}"),
        }
    }
}
