//! Circular doubly-linked lists ("rings") stored in an arena.
//!
//! A [`Ring`] arena owns the nodes of any number of rings. A ring is named by
//! any of its nodes ([`NodeId`]), and the empty ring by [`EMPTY`]; there is no
//! head or sentinel node. Rings can be spliced together ([`Ring::concat`]),
//! cut apart ([`Ring::unlink`]), searched ([`Ring::find`]) and freed node by
//! node ([`Ring::delete_cb`]) or as a whole ([`Ring::clear_cb`]).
//!
//! Items are never cloned. When a node is freed its item is handed to the
//! caller's release callback, if any, and dropped otherwise.

mod config;
pub mod error;
mod node;
mod ring;

pub use crate::config::Config;
pub use crate::error::{Error, TryInsertError};
pub use crate::node::NodeId;
pub use crate::ring::Ring;

/// A ring, named by one of its nodes, or the empty ring.
pub type Handle = Option<NodeId>;

/// The empty ring.
pub const EMPTY: Handle = None;

/// Receives each item as its node is freed. User data is whatever the
/// closure captures.
pub type ReleaseFn<'a, T> = &'a mut dyn FnMut(T);

/// Search predicate for [`Ring::find`].
pub type FindFn<'a, T> = &'a mut dyn FnMut(&T) -> bool;

/// Whether `handle` is the empty ring.
pub fn is_empty(handle: Handle) -> bool {
    handle.is_none()
}
