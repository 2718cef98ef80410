use alloc::vec::Vec;

use super::handle::Handle;
use super::node::Node;

/// Slot storage for the nodes of a tree.
///
/// Released slots are recycled by later allocations, so a tree that sees a
/// steady mix of inserts and removals keeps a stable footprint. Dropping the
/// arena drops every node still in it.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Allocates a detached leaf holding `value`.
    pub(crate) fn alloc_leaf(&mut self, value: T) -> Handle {
        let node = Node::leaf(value);
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(node);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc_leaf()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Some(node));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.slots[handle.to_index()].as_ref().expect("`Arena::node()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.slots[handle.to_index()].as_mut().expect("`Arena::node_mut()` - `handle` is invalid!")
    }

    /// Frees the slot behind `handle` and returns the payload it held.
    ///
    /// The node must already be unlinked from the tree.
    pub(crate) fn release(&mut self, handle: Handle) -> T {
        let node = self.slots[handle.to_index()].take().expect("`Arena::release()` - `handle` is invalid!");
        self.free.push(handle);
        node.into_value()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc_leaf('a');
        let _b = arena.alloc_leaf('b');
        assert_eq!(arena.release(a), 'a');
        assert_eq!(arena.len(), 1);

        let c = arena.alloc_leaf('c');
        assert_eq!(c, a);
        assert_eq!(*arena.node(c).value(), 'c');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn fills_every_addressable_slot() {
        let mut arena = Arena::new();
        for i in 0..=Handle::MAX {
            arena.alloc_leaf(i);
        }
        assert_eq!(arena.len(), Handle::MAX + 1);
    }

    #[test]
    #[should_panic(expected = "`Arena::alloc_leaf()` - arena is at maximum capacity")]
    fn alloc_beyond_capacity_panics() {
        let mut arena = Arena::new();
        for i in 0..=Handle::MAX + 1 {
            arena.alloc_leaf(i);
        }
    }

    #[test]
    #[should_panic(expected = "`Arena::node()` - `handle` is invalid!")]
    fn stale_handle_panics() {
        let mut arena = Arena::new();
        let handle = arena.alloc_leaf(1u8);
        arena.release(handle);
        let _ = arena.node(handle);
    }

    proptest! {
        #[test]
        fn arena_tracks_live_nodes(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc_leaf(value);
                        prop_assert!(model.iter().all(|&(live, _)| live != handle));
                        model.push((handle, value));
                    }
                    Operation::Grow(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let handle = model[which % model.len()].0;
                        arena.node_mut(handle).grow();
                        prop_assert_eq!(arena.node(handle).size(), 2);
                        arena.node_mut(handle).shrink();
                    }
                    Operation::Release(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (handle, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.release(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());

                for &(handle, value) in &model {
                    let node = arena.node(handle);
                    prop_assert_eq!(*node.value(), value);
                    prop_assert_eq!(node.size(), 1);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Grow(usize),
        Release(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => any::<usize>().prop_map(Operation::Grow),
            8 => any::<usize>().prop_map(Operation::Release),
            1 => Just(Operation::Clear),
        ]
    }
}
