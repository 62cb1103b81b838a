use super::Ring;
use crate::error::{Error, Result, TryInsertError};
use crate::node::NodeId;
use crate::Handle;
use tracing::trace;

impl<T> Ring<T> {
    /// Places ring `other` right after `anchor`, merging both rings.
    ///
    /// Returns the node just before the first element of `other`, so that
    /// `next` on the result always lands on the first spliced element:
    /// * `other` empty: `anchor`, untouched.
    /// * `anchor` empty: the last node of `other`.
    /// * otherwise: the last node of `other`, now followed by what used to
    ///   follow `anchor`.
    ///
    /// `other` is consumed: only the merged ring may be cleared afterwards.
    /// `other` must not already belong to `anchor`'s ring; this is only
    /// checked in debug builds.
    ///
    /// # Sketch
    /// ```text
    /// ┌──────┬──►┌─────┐  ...  ┌────┬──►┌────┐
    /// │anchor│   │other│       │last│   │next│
    /// └──────┘◄──┴─────┘  ...  └────┘◄──┴────┘
    /// ```
    pub fn concat(&mut self, anchor: Handle, other: Handle) -> Result<Handle> {
        let Some(other) = other else {
            if let Some(anchor) = anchor {
                self.raw.check(anchor)?;
            }
            return Ok(anchor);
        };
        let other = self.raw.check(other)?;
        let last = self.raw.prev(other);

        let Some(anchor) = anchor else {
            return Ok(Some(self.raw.id(last)));
        };
        let anchor = self.raw.check(anchor)?;

        debug_assert!(
            !self.raw.reaches(other, anchor),
            "concat: ring is already part of the anchor's ring"
        );

        let next = self.raw.next(anchor);
        self.raw.link(anchor, other);
        self.raw.link(last, next);

        trace!(anchor, other, last, "concat");
        Ok(Some(self.raw.id(last)))
    }

    /// Inserts `item` right after `anchor` and returns its node.
    ///
    /// With an empty anchor this starts a new ring.
    pub fn insert(&mut self, anchor: Handle, item: T) -> Result<NodeId, TryInsertError<T>> {
        let node = self.singleton(item)?;
        match self.concat(anchor, Some(node)) {
            Ok(last) => Ok(last.unwrap_or(node)),
            Err(err) => {
                let val = self.raw.free(node.key);
                Err(TryInsertError { err, val })
            }
        }
    }

    /// Detaches `[start, end)` into a ring of its own and returns `start`.
    ///
    /// The remaining ring is closed across the gap (`start.prev` is linked
    /// to `end`). No node is allocated or freed and the range length is
    /// never walked.
    ///
    /// `start == end` is rejected: it could mean either nothing or the whole
    /// ring. `end` must be reachable from `start`; this is only checked in
    /// debug builds.
    pub fn unlink(&mut self, start: NodeId, end: NodeId) -> Result<NodeId> {
        let s = self.raw.check(start)?;
        let e = self.raw.check(end)?;
        if s == e {
            return Err(Error::DegenerateRange(start));
        }

        debug_assert!(
            self.raw.reaches(s, e),
            "unlink: end is not in the same ring as start"
        );

        let prev = self.raw.prev(s);
        let last = self.raw.prev(e);

        self.raw.link(prev, e);
        self.raw.link(last, s);

        trace!(start = s, end = e, "unlink");
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use crate::ring::tests::{items, ring_of, trace_init};
    use crate::{Config, Error, Ring, EMPTY};

    #[test]
    fn insert_keeps_order() {
        let _trace = trace_init();
        let mut rings = Ring::new();
        let mut list = EMPTY;
        for i in 1..=5 {
            list = Some(rings.insert(list, i).unwrap());
        }

        let first = rings.next(list.unwrap());
        assert_eq!(items(&rings, Some(first)), vec![1, 2, 3, 4, 5]);
        assert_eq!(rings.verify(list), Ok(5));
    }

    #[test]
    fn concat_with_empty() {
        let mut rings = Ring::new();
        let list = ring_of(&mut rings, 3);

        assert_eq!(rings.concat(list, EMPTY), Ok(list));
        assert_eq!(rings.concat(EMPTY, EMPTY), Ok(EMPTY));

        let first = list.unwrap();
        let last = rings.prev(first);
        let merged = rings.concat(EMPTY, list).unwrap();
        assert_eq!(merged, Some(last));
        assert_eq!(merged.map(|m| rings.next(m)), Some(first));
    }

    #[test]
    fn concat_in_the_middle() {
        let _trace = trace_init();
        let mut rings = Ring::new();
        let a = ring_of(&mut rings, 4);
        let mut b = EMPTY;
        for i in 10..13 {
            b = Some(rings.insert(b, i).unwrap());
        }
        let b_first = b.map(|b| rings.next(b));
        let anchor = Some(rings.next(a.unwrap()));

        let last = rings.concat(anchor, b_first).unwrap();

        assert_eq!(rings.item(last), Some(&12));
        assert_eq!(items(&rings, a), vec![0, 1, 10, 11, 12, 2, 3]);
        assert_eq!(rings.verify(a), Ok(7));
    }

    #[test]
    fn concat_rejects_stale_handle() {
        let mut rings = Ring::new();
        let a = rings.singleton(1).unwrap();
        let b = rings.singleton(2).unwrap();
        rings.delete(Some(b)).unwrap();

        assert_eq!(rings.concat(Some(a), Some(b)), Err(Error::InvalidHandle(b)));
        assert_eq!(rings.concat(Some(b), Some(a)), Err(Error::InvalidHandle(b)));
        assert_eq!(rings.concat(Some(b), EMPTY), Err(Error::InvalidHandle(b)));
        assert_eq!(rings.verify(Some(a)), Ok(1));
    }

    #[test]
    fn insert_hands_item_back() {
        let mut rings = Ring::with_config(Config::new().max_nodes(1));
        let a = rings.insert(EMPTY, "a").unwrap();

        let err = rings.insert(Some(a), "b").unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(err.into_inner(), "b");

        rings.delete(Some(a)).unwrap();
        let err = rings.insert(Some(a), "c").unwrap_err();
        assert!(err.is_invalid_handle());
        assert_eq!(err.into_inner(), "c");
        assert_eq!(rings.node_count(), 0);
    }

    #[test]
    fn unlink_partitions_ring() {
        let _trace = trace_init();
        let mut rings = Ring::new();
        let list = ring_of(&mut rings, 10);
        let first = list.unwrap();

        let mut start = first;
        for _ in 0..2 {
            start = rings.next(start);
        }
        let mut end = start;
        for _ in 0..4 {
            end = rings.next(end);
        }

        let unlinked = rings.unlink(start, end).unwrap();
        assert_eq!(unlinked, start);
        assert_eq!(items(&rings, Some(unlinked)), vec![2, 3, 4, 5]);
        assert_eq!(items(&rings, list), vec![0, 1, 6, 7, 8, 9]);
        assert_eq!(rings.verify(Some(unlinked)), Ok(4));
        assert_eq!(rings.verify(list), Ok(6));

        // put 2..6 back after 1
        let one = rings.next(first);
        rings.concat(Some(one), Some(unlinked)).unwrap();
        assert_eq!(items(&rings, list), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn unlink_everything_but_end() {
        let mut rings = Ring::new();
        let list = ring_of(&mut rings, 3);
        let first = list.unwrap();
        let last = rings.prev(first);

        let unlinked = rings.unlink(first, last).unwrap();
        assert_eq!(items(&rings, Some(unlinked)), vec![0, 1]);
        assert!(rings.is_singleton(last));
    }

    #[test]
    fn unlink_rejects_degenerate_range() {
        let mut rings = Ring::new();
        let list = ring_of(&mut rings, 3);
        let first = list.unwrap();

        assert_eq!(rings.unlink(first, first), Err(Error::DegenerateRange(first)));
        assert_eq!(rings.verify(list), Ok(3));

        // stale end, then stale start
        let last = rings.prev(first);
        rings.delete(Some(last)).unwrap();
        assert_eq!(rings.unlink(first, last), Err(Error::InvalidHandle(last)));
        assert_eq!(rings.unlink(last, first), Err(Error::InvalidHandle(last)));
        assert_eq!(rings.verify(list), Ok(2));
        assert_eq!(rings.node_count(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "concat: ring is already part of the anchor's ring")]
    fn concat_into_own_ring_panics() {
        let mut rings = Ring::new();
        let list = ring_of(&mut rings, 3);
        let first = list.unwrap();
        let second = rings.next(first);

        let _ = rings.concat(list, Some(second));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unlink: end is not in the same ring as start")]
    fn unlink_across_rings_panics() {
        let mut rings = Ring::new();
        let a = ring_of(&mut rings, 3);
        let b = ring_of(&mut rings, 2);

        let _ = rings.unlink(a.unwrap(), b.unwrap());
    }
}
