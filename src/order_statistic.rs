/// A zero-based rank into the ascending order of an
/// [`OrderStatisticTree`](crate::OrderStatisticTree).
///
/// Used to index a tree by position rather than by value.
///
/// # Examples
///
/// ```
/// use ost_tree::{OrderStatisticTree, Rank};
///
/// let tree = OrderStatisticTree::from(["b", "a", "c"]);
///
/// assert_eq!(tree[Rank(0)], "a");
/// assert_eq!(tree[Rank(2)], "c");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
