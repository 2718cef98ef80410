use super::OrderStatisticTree;
use crate::raw::RawTree;

impl<T> OrderStatisticTree<T> {
    /// Creates an empty tree with room for at least `capacity` values before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ost_tree::OrderStatisticTree;
    ///
    /// let tree: OrderStatisticTree<i32> = OrderStatisticTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderStatisticTree {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of values the tree can hold without reallocating its
    /// node storage.
    ///
    /// Slots freed by removals are reused by later inserts.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
