use super::handle::Handle;

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A binary search tree node augmented with its subtree size.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // Number of nodes in the subtree rooted here, this node included.
    size: usize,
}

impl<T> Node<T> {
    /// Creates a detached leaf holding `value`.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            size: 1,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    /// Swaps in `value` and hands back the previous payload.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns true if both child slots are occupied.
    pub(crate) const fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Returns the single child (or none) that replaces this node when it is
    /// unlinked. Only meaningful when [`has_two_children`](Self::has_two_children)
    /// is false.
    pub(crate) const fn only_child(&self) -> Option<Handle> {
        match self.left {
            Some(left) => Some(left),
            None => self.right,
        }
    }

    #[inline]
    pub(crate) const fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn grow(&mut self) {
        self.size += 1;
    }

    pub(crate) fn shrink(&mut self) {
        debug_assert!(self.size > 1, "`Node::shrink()` - subtree size would drop to zero");
        self.size -= 1;
    }
}
