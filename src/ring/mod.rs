mod raw_ring;
mod release;
mod splice;

use self::raw_ring::RawRing;
use crate::config::Config;
use crate::error::{Error, Result, TryInsertError};
use crate::node::NodeId;
use crate::{FindFn, Handle, EMPTY};
use tracing::{debug, trace, warn};

/// Arena owning the nodes of any number of circular doubly-linked rings.
///
/// A ring has no head object: any of its nodes, as a [`NodeId`], stands for
/// the whole ring, and the empty ring is [`EMPTY`]. Items are handed back to
/// the caller (through a release callback) when their node is freed; they are
/// never cloned.
///
/// ```
/// use clist_rs::{Ring, EMPTY};
///
/// let mut rings = Ring::new();
/// let mut list = EMPTY;
/// for i in 1..=3 {
///     list = Some(rings.insert(list, i).unwrap());
/// }
///
/// // `list` is the last node inserted, its successor is the first.
/// let first = rings.next(list.unwrap());
/// assert_eq!(rings.item(Some(first)), Some(&1));
///
/// list = rings.clear(list).unwrap();
/// assert!(clist_rs::is_empty(list));
/// ```
pub struct Ring<T> {
    raw: RawRing<T>,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::new().capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        debug!(
            capacity = config.capacity,
            max_nodes = ?config.max_nodes,
            "creating ring arena"
        );
        Self {
            raw: RawRing::with_config(config),
        }
    }

    /// Live nodes across every ring of this arena.
    pub fn node_count(&self) -> usize {
        self.raw.len()
    }

    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    pub fn max_nodes(&self) -> Option<usize> {
        self.raw.max_nodes()
    }

    /// Creates a one-node ring holding `item`.
    ///
    /// Fails only when the arena is bounded by
    /// [`Config::max_nodes`](crate::Config::max_nodes) and already full; the
    /// item is then returned inside the error.
    pub fn singleton(&mut self, item: T) -> Result<NodeId, TryInsertError<T>> {
        match self.raw.alloc(item) {
            Ok(key) => {
                trace!(key, "singleton");
                Ok(self.raw.id(key))
            }
            Err(val) => {
                let max = self.raw.max_nodes().unwrap_or_default();
                warn!(max, "node limit reached, refusing singleton");
                Err(TryInsertError {
                    err: Error::CapacityExceeded { max },
                    val,
                })
            }
        }
    }

    /// Whether `id` refers to a live node of this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        self.raw.resolve(id).is_some()
    }

    /// # Panics
    /// If `node` is stale.
    pub fn is_singleton(&self, node: NodeId) -> bool {
        let key = self.raw.expect_live(node);
        self.raw.next(key) == key
    }

    /// The item stored at `handle`, or `None` (the no-item marker) when the
    /// handle is empty or stale.
    pub fn item(&self, handle: Handle) -> Option<&T> {
        let key = self.raw.resolve(handle?)?;
        Some(&self.raw.node(key).item)
    }

    pub fn item_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let key = self.raw.resolve(handle?)?;
        Some(self.raw.item_mut(key))
    }

    /// # Panics
    /// If `node` is stale.
    pub fn next(&self, node: NodeId) -> NodeId {
        let key = self.raw.expect_live(node);
        self.raw.id(self.raw.next(key))
    }

    /// # Panics
    /// If `node` is stale.
    pub fn prev(&self, node: NodeId) -> NodeId {
        let key = self.raw.expect_live(node);
        self.raw.id(self.raw.prev(key))
    }

    /// Number of nodes in the ring `handle` belongs to. O(n).
    ///
    /// # Panics
    /// If `handle` is stale.
    pub fn ring_len(&self, handle: Handle) -> usize {
        let Some(id) = handle else {
            return 0;
        };
        let start = self.raw.expect_live(id);
        let mut len = 1;
        let mut cur = self.raw.next(start);
        while cur != start {
            len += 1;
            cur = self.raw.next(cur);
        }
        len
    }

    /// Returns the first node, walking `next` from `handle`, whose item
    /// satisfies `predicate`. Each node is visited at most once.
    ///
    /// Returns [`EMPTY`] if nothing matches, if `handle` is empty or stale, or
    /// if no predicate is given.
    pub fn find(&self, handle: Handle, predicate: Option<FindFn<'_, T>>) -> Handle {
        let (Some(id), Some(predicate)) = (handle, predicate) else {
            return EMPTY;
        };
        let Some(start) = self.raw.resolve(id) else {
            return EMPTY;
        };

        let mut cur = start;
        loop {
            if predicate(&self.raw.node(cur).item) {
                return Some(self.raw.id(cur));
            }
            cur = self.raw.next(cur);
            if cur == start {
                return EMPTY;
            }
        }
    }

    /// Checks that `next` and `prev` are mutual inverses on every node of
    /// the ring and that it closes. Returns the ring size.
    pub fn verify(&self, handle: Handle) -> Result<usize> {
        let Some(id) = handle else {
            return Ok(0);
        };
        let start = self.raw.check(id)?;

        let mut len = 0;
        let mut cur = start;
        loop {
            let node = self.raw.node(cur);
            let next_ok = self
                .raw
                .get(node.next)
                .map_or(false, |next| next.prev == cur);
            let prev_ok = self
                .raw
                .get(node.prev)
                .map_or(false, |prev| prev.next == cur);
            if !next_ok || !prev_ok {
                return Err(Error::Corrupted(self.raw.id(cur)));
            }

            len += 1;
            cur = node.next;
            if cur == start {
                return Ok(len);
            }
            if len >= self.raw.len() {
                return Err(Error::Corrupted(self.raw.id(cur)));
            }
        }
    }
}
