use std::fmt;

/// Identity of one node inside a [`Ring`](crate::Ring) arena.
///
/// `key` names the slab slot, `stamp` the allocation that filled it. Once the
/// node is freed the id goes stale for good: the slot may be reused, but
/// never with the same stamp.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) key: usize,
    pub(crate) stamp: u64,
}

impl NodeId {
    pub(crate) fn new(key: usize, stamp: u64) -> Self {
        Self { key, stamp }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@{})", self.key, self.stamp)
    }
}

/// Ring element: the item plus the slot keys of its neighbours.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) stamp: u64,
}

impl<T> Node<T> {
    /// A node that is its own predecessor and successor.
    pub(crate) fn singleton(item: T, key: usize, stamp: u64) -> Self {
        Self {
            item,
            prev: key,
            next: key,
            stamp,
        }
    }
}
