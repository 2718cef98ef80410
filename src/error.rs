/// Errors returned by the fallible operations of an
/// [`OrderStatisticTree`](crate::OrderStatisticTree).
///
/// A rejected call never leaves the tree partially modified.
///
/// # Examples
///
/// ```
/// use ost_tree::{Error, OrderStatisticTree};
///
/// let mut tree = OrderStatisticTree::from(["a", "b"]);
/// assert_eq!(tree.get_by_rank(5), Err(Error::IndexOutOfRange { rank: 5, len: 2 }));
/// assert_eq!(tree.try_insert("a"), Err(Error::DuplicateValue));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// A rank-based operation was given a rank at or past the number of
    /// values held (including any rank on an empty tree).
    #[error("rank {rank} is out of range for a tree holding {len} values")]
    IndexOutOfRange {
        /// The zero-based rank that was requested.
        rank: usize,
        /// The number of values in the tree at the time of the call.
        len: usize,
    },
    /// [`try_insert`](crate::OrderStatisticTree::try_insert) was given a value
    /// equal to one already in the tree.
    #[error("an equal value is already present in the tree")]
    DuplicateValue,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_rank() {
        let error = Error::IndexOutOfRange { rank: 7, len: 3 };
        assert_eq!(error.to_string(), "rank 7 is out of range for a tree holding 3 values");
        assert_eq!(Error::DuplicateValue.to_string(), "an equal value is already present in the tree");
    }

    #[test]
    fn is_a_core_error() {
        fn assert_error<E: core::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::DuplicateValue);
    }
}
