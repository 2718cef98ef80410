//! An unbalanced order-statistic binary search tree for Rust.
//!
//! This crate provides [`OrderStatisticTree`], an ordered set of distinct values
//! whose nodes carry subtree sizes. The sizes make positional access cheap:
//!
//! - [`insert`](OrderStatisticTree::insert) - Add a value (equal values are ignored)
//! - [`get_by_rank`](OrderStatisticTree::get_by_rank) - Borrow the value at a given sorted position
//! - [`remove_by_rank`](OrderStatisticTree::remove_by_rank) - Remove the value at a given sorted position
//! - [`len`](OrderStatisticTree::len) - Number of values held
//!
//! Each of these costs one descent from the root, so O(h) where h is the tree
//! height. The tree never rebalances: h is logarithmic in expectation for
//! random insertion order and linear for sorted insertion order.
//!
//! # Example
//!
//! ```
//! use ost_tree::{Error, OrderStatisticTree, Rank};
//!
//! let mut tree = OrderStatisticTree::new();
//! for word in ["pear", "apple", "fig", "kiwi"] {
//!     tree.insert(word);
//! }
//!
//! // Rank 0 is the smallest value.
//! assert_eq!(tree.get_by_rank(0), Ok(&"apple"));
//! assert_eq!(tree[Rank(3)], "pear");
//!
//! // Removing by rank shifts every later value down one position.
//! assert_eq!(tree.remove_by_rank(1), Ok("fig"));
//! assert_eq!(tree.get_by_rank(1), Ok(&"kiwi"));
//!
//! // Out-of-range ranks are reported, never undefined.
//! assert_eq!(tree.get_by_rank(3), Err(Error::IndexOutOfRange { rank: 3, len: 3 }));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Checked ranks** - Rank-based calls return [`Error`] instead of panicking
//! - **Arena storage** - Nodes live in one slot vector addressed by 32-bit handles,
//!   so dropping a tree of any shape never recurses
//!
//! # Thread safety
//!
//! The tree has no interior synchronization. Mutating operations take
//! `&mut self`, so sharing a tree across threads requires the caller to wrap
//! it in a lock or confine it to one owner.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod order_statistic_tree;

pub use error::Error;
pub use order_statistic::Rank;
pub use order_statistic_tree::OrderStatisticTree;
