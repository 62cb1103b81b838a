use crate::config::Config;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId};
use slab::Slab;

/// Node storage shared by every ring of one arena.
///
/// Links are plain slot keys. Nothing here knows about ring boundaries; the
/// surgery in `splice` and `release` keeps the closure invariant.
pub(crate) struct RawRing<T> {
    nodes: Slab<Node<T>>,
    next_stamp: u64,
    max_nodes: Option<usize>,
}

impl<T> RawRing<T> {
    pub(crate) fn with_config(config: Config) -> Self {
        Self {
            nodes: Slab::with_capacity(config.capacity),
            next_stamp: 0,
            max_nodes: config.max_nodes,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    pub(crate) fn is_full(&self) -> bool {
        self.max_nodes.map_or(false, |max| self.nodes.len() >= max)
    }

    /// Stores `item` in a fresh self-linked node. Hands the item back when
    /// the arena is full.
    pub(crate) fn alloc(&mut self, item: T) -> core::result::Result<usize, T> {
        if self.is_full() {
            return Err(item);
        }

        let stamp = self.next_stamp;
        self.next_stamp += 1;

        let entry = self.nodes.vacant_entry();
        let key = entry.key();
        entry.insert(Node::singleton(item, key, stamp));
        Ok(key)
    }

    /// Releases the slot at `key` and returns its item. The node must
    /// already be unreachable from any ring that outlives this call.
    pub(crate) fn free(&mut self, key: usize) -> T {
        self.nodes.remove(key).item
    }

    /// Resolves a handle to its slot key if the node is still alive.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<usize> {
        match self.nodes.get(id.key) {
            Some(node) if node.stamp == id.stamp => Some(id.key),
            _ => None,
        }
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<usize> {
        self.resolve(id).ok_or(Error::InvalidHandle(id))
    }

    /// Like [`check`](Self::check), but for callers whose contract is a
    /// live node.
    pub(crate) fn expect_live(&self, id: NodeId) -> usize {
        match self.resolve(id) {
            Some(key) => key,
            None => panic!("stale node handle {:?}", id),
        }
    }

    pub(crate) fn id(&self, key: usize) -> NodeId {
        NodeId::new(key, self.nodes[key].stamp)
    }

    pub(crate) fn node(&self, key: usize) -> &Node<T> {
        &self.nodes[key]
    }

    pub(crate) fn get(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    pub(crate) fn item_mut(&mut self, key: usize) -> &mut T {
        &mut self.nodes[key].item
    }

    pub(crate) fn next(&self, key: usize) -> usize {
        self.nodes[key].next
    }

    pub(crate) fn prev(&self, key: usize) -> usize {
        self.nodes[key].prev
    }

    /// Makes `next` the successor of `prev`.
    ///
    /// Whatever sat between them before is no longer reachable from this
    /// side and must be freed or closed into its own ring.
    pub(crate) fn link(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Whether `to` is reachable from `from` by following `next`, visiting
    /// each node at most once.
    pub(crate) fn reaches(&self, from: usize, to: usize) -> bool {
        let mut cur = from;
        loop {
            if cur == to {
                return true;
            }
            cur = self.next(cur);
            if cur == from {
                return false;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_next(&mut self, key: usize, next: usize) {
        self.nodes[key].next = next;
    }
}
