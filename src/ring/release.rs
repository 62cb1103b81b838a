use super::Ring;
use crate::error::Result;
use crate::node::NodeId;
use crate::{Handle, ReleaseFn, EMPTY};
use tracing::{debug, trace};

impl<T> Ring<T> {
    /// Frees every node of `[start, end)` and closes the ring across the gap.
    ///
    /// Each item is handed to `release`, in ring order, as its node is freed.
    /// `start == end` frees nothing. Returns the number of freed nodes.
    ///
    /// `end` must be reachable from `start`; this is only checked in debug
    /// builds.
    pub fn clear_sublist(
        &mut self,
        start: NodeId,
        end: NodeId,
        mut release: Option<ReleaseFn<'_, T>>,
    ) -> Result<usize> {
        let s = self.raw.check(start)?;
        let e = self.raw.check(end)?;
        debug_assert!(
            self.raw.reaches(s, e),
            "clear_sublist: end is not in the same ring as start"
        );

        Ok(self.release_range(s, e, &mut release))
    }

    fn release_range(
        &mut self,
        start: usize,
        end: usize,
        release: &mut Option<ReleaseFn<'_, T>>,
    ) -> usize {
        let prev = self.raw.prev(start);
        let mut freed = 0;
        let mut cur = start;

        while cur != end {
            let next = self.raw.next(cur);
            let item = self.raw.free(cur);
            if let Some(release) = release.as_mut() {
                release(item);
            }
            freed += 1;
            cur = next;
        }

        self.raw.link(prev, end);
        freed
    }

    /// Frees the whole ring `handle` belongs to. See [`clear_cb`](Self::clear_cb).
    pub fn clear(&mut self, handle: Handle) -> Result<Handle> {
        self.clear_cb(handle, None)
    }

    /// Frees the whole ring `handle` belongs to, handing every item to
    /// `release` in ring order starting at `handle`.
    ///
    /// Always returns [`EMPTY`]; overwrite the handle with it:
    ///
    /// ```
    /// # use clist_rs::{Ring, EMPTY};
    /// let mut rings = Ring::new();
    /// let mut list = Some(rings.singleton("a").unwrap());
    ///
    /// let mut released = Vec::new();
    /// list = rings.clear_cb(list, Some(&mut |item: &'static str| released.push(item))).unwrap();
    ///
    /// assert_eq!(list, EMPTY);
    /// assert_eq!(released, ["a"]);
    /// ```
    pub fn clear_cb(
        &mut self,
        handle: Handle,
        mut release: Option<ReleaseFn<'_, T>>,
    ) -> Result<Handle> {
        let Some(id) = handle else {
            return Ok(EMPTY);
        };
        let start = self.raw.check(id)?;

        // `[start, last)` leaves `last` linked to itself
        let last = self.raw.prev(start);
        let freed = self.release_range(start, last, &mut release);

        let item = self.raw.free(last);
        if let Some(release) = release {
            release(item);
        }

        debug!(nodes = freed + 1, "cleared ring");
        Ok(EMPTY)
    }

    /// Frees `node`. See [`delete_cb`](Self::delete_cb).
    pub fn delete(&mut self, node: Handle) -> Result<Handle> {
        self.delete_cb(node, None)
    }

    /// Frees `node`, handing its item to `release`.
    ///
    /// Returns the former predecessor of `node`, a handle to what is left of
    /// the ring, or [`EMPTY`] if `node` was alone. Deleting [`EMPTY`] does
    /// nothing and never calls `release`.
    pub fn delete_cb(
        &mut self,
        node: Handle,
        release: Option<ReleaseFn<'_, T>>,
    ) -> Result<Handle> {
        let Some(id) = node else {
            return Ok(EMPTY);
        };
        let key = self.raw.check(id)?;

        let prev = self.raw.prev(key);
        let next = self.raw.next(key);
        let remaining = if next == key {
            EMPTY
        } else {
            self.raw.link(prev, next);
            Some(self.raw.id(prev))
        };

        let item = self.raw.free(key);
        if let Some(release) = release {
            release(item);
        }

        trace!(key, singleton = remaining.is_none(), "delete");
        Ok(remaining)
    }
}
