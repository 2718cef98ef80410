use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use alloc::vec::Vec;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Side;

/// Stack of node handles recorded while walking down the tree.
type Path = SmallVec<[Handle; 32]>;

/// The unbalanced order-statistic tree backing `OrderStatisticTree`.
///
/// All descents are iterative so that a degenerate (list-shaped) tree cannot
/// exhaust the call stack.
#[derive(Clone)]
pub(crate) struct RawTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<T>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of values in the tree, read from the root's size.
    pub(crate) fn len(&self) -> usize {
        self.subtree_size(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    fn subtree_size(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| self.nodes.node(handle).size())
    }

    /// Points the parent's slot (or the root) at `child`.
    fn splice(&mut self, parent: Option<(Handle, Side)>, child: Option<Handle>) {
        match parent {
            Some((handle, side)) => self.nodes.node_mut(handle).set_child(side, child),
            None => self.root = child,
        }
    }

    /// Returns the value at zero-based `rank`, or `None` if `rank >= len`.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.root;
        let mut remaining = rank;

        loop {
            debug_assert!(
                current.is_some(),
                "get_by_rank: subtree size invariant violated - ran off the tree looking for rank {rank}"
            );
            let node = self.nodes.node(current?);
            let left_size = self.subtree_size(node.left());
            match remaining.cmp(&left_size) {
                Less => current = node.left(),
                Equal => return Some(node.value()),
                Greater => {
                    remaining -= left_size + 1;
                    current = node.right();
                }
            }
        }
    }

    /// Removes and returns the value at zero-based `rank`, or returns `None`
    /// without touching the tree if `rank >= len`.
    ///
    /// A node with two children keeps its slot and takes over the payload of
    /// its in-order successor (the minimum of its right subtree); the
    /// successor's node is the one unlinked.
    pub(crate) fn remove_by_rank(&mut self, rank: usize) -> Option<T> {
        if rank >= self.len() {
            return None;
        }

        let mut parent: Option<(Handle, Side)> = None;
        let mut current = self.root?;
        let mut remaining = rank;

        // Every node passed on the way down loses exactly one descendant.
        loop {
            let node = self.nodes.node(current);
            let left_size = self.subtree_size(node.left());
            let side = match remaining.cmp(&left_size) {
                Less => Side::Left,
                Equal => break,
                Greater => {
                    remaining -= left_size + 1;
                    Side::Right
                }
            };
            let next = node.child(side);
            debug_assert!(
                next.is_some(),
                "remove_by_rank: subtree size invariant violated - ran off the tree looking for rank {rank}"
            );
            self.nodes.node_mut(current).shrink();
            parent = Some((current, side));
            current = next?;
        }

        let target = self.nodes.node(current);
        match target.right() {
            Some(right) if target.has_two_children() => {
                self.nodes.node_mut(current).shrink();
                let successor = self.take_min(current, right);
                Some(self.nodes.node_mut(current).replace_value(successor))
            }
            _ => {
                let replacement = target.only_child();
                self.splice(parent, replacement);
                Some(self.nodes.release(current))
            }
        }
    }

    /// Unlinks the minimum of `top`, the right subtree of `owner`, and returns
    /// its value.
    fn take_min(&mut self, owner: Handle, top: Handle) -> T {
        let mut parent = (owner, Side::Right);
        let mut current = top;

        while let Some(left) = self.nodes.node(current).left() {
            self.nodes.node_mut(current).shrink();
            parent = (current, Side::Left);
            current = left;
        }

        let right = self.nodes.node(current).right();
        self.splice(Some(parent), right);
        self.nodes.release(current)
    }

    /// Returns the smallest value.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut current = self.nodes.node(self.root?);
        while let Some(left) = current.left() {
            current = self.nodes.node(left);
        }
        Some(current.value())
    }

    /// Returns the largest value.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut current = self.nodes.node(self.root?);
        while let Some(right) = current.right() {
            current = self.nodes.node(right);
        }
        Some(current.value())
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        stack.extend(self.root.map(|root| (root, 1)));

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.node(handle);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Empties the tree, returning its values in ascending order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len());
        let mut iter = RawIter::new(self);
        while let Some(handle) = iter.next_handle() {
            order.push(handle);
        }

        let values: Vec<T> = order.into_iter().map(|handle| self.nodes.release(handle)).collect();
        self.clear();
        values
    }
}

impl<T: Ord> RawTree<T> {
    /// Inserts `value` unless an equal value is present. Returns whether a node
    /// was created.
    ///
    /// Subtree sizes along the descent are only bumped once the new leaf is
    /// linked, so a rejected duplicate leaves every size untouched.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc_leaf(value));
            return true;
        };

        let mut path = Path::new();
        let side = loop {
            let node = self.nodes.node(current);
            let side = match value.cmp(node.value()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            path.push(current);
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let leaf = self.nodes.alloc_leaf(value);
        self.nodes.node_mut(current).set_child(side, Some(leaf));
        self.increment_sizes_along_path(&path);
        true
    }

    fn increment_sizes_along_path(&mut self, path: &Path) {
        for &handle in path {
            self.nodes.node_mut(handle).grow();
        }
    }

    /// Returns the zero-based rank of `value`, or `None` if it is absent.
    pub(crate) fn rank_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut rank = 0;

        while let Some(handle) = current {
            let node = self.nodes.node(handle);
            match value.cmp(node.value().borrow()) {
                Less => current = node.left(),
                Equal => return Some(rank + self.subtree_size(node.left())),
                Greater => {
                    rank += self.subtree_size(node.left()) + 1;
                    current = node.right();
                }
            }
        }
        None
    }
}

/// In-order walk over a [`RawTree`] that can be consumed from both ends.
///
/// `front` holds the pending left spine for ascending order and `back` the
/// pending right spine for descending order. `remaining` stops the two ends
/// from crossing.
pub(crate) struct RawIter<'a, T> {
    nodes: &'a Arena<T>,
    front: Path,
    back: Path,
    remaining: usize,
}

impl<'a, T> RawIter<'a, T> {
    pub(crate) fn new(tree: &'a RawTree<T>) -> Self {
        let mut iter = Self {
            nodes: &tree.nodes,
            front: Path::new(),
            back: Path::new(),
            remaining: tree.len(),
        };
        iter.push_spine(tree.root, Side::Left);
        iter.push_spine(tree.root, Side::Right);
        iter
    }

    fn push_spine(&mut self, mut link: Option<Handle>, side: Side) {
        let stack = match side {
            Side::Left => &mut self.front,
            Side::Right => &mut self.back,
        };
        while let Some(handle) = link {
            stack.push(handle);
            link = self.nodes.node(handle).child(side);
        }
    }

    fn next_handle(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        self.remaining -= 1;
        self.push_spine(self.nodes.node(handle).right(), Side::Left);
        Some(handle)
    }

    fn next_back_handle(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        self.remaining -= 1;
        self.push_spine(self.nodes.node(handle).left(), Side::Right);
        Some(handle)
    }

    pub(crate) fn next_value(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.next_handle().map(|handle| nodes.node(handle).value())
    }

    pub(crate) fn next_back_value(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.next_back_handle().map(|handle| nodes.node(handle).value())
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}
