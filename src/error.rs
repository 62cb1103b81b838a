use crate::node::NodeId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("insert failed because the arena holds its maximum of {max} nodes")]
    CapacityExceeded { max: usize },
    #[error("handle {0:?} does not refer to a live node of this arena")]
    InvalidHandle(NodeId),
    #[error("cannot unlink the range starting and ending at {0:?}")]
    DegenerateRange(NodeId),
    #[error("ring is corrupted at node {0:?}")]
    Corrupted(NodeId),
}

impl Error {
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(&self, Error::CapacityExceeded { .. })
    }

    pub fn is_invalid_handle(&self) -> bool {
        matches!(&self, Error::InvalidHandle(_))
    }

    pub fn is_degenerate_range(&self) -> bool {
        matches!(&self, Error::DegenerateRange(_))
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(&self, Error::Corrupted(_))
    }
}

/// Returned by [`Ring::singleton`](crate::Ring::singleton) and
/// [`Ring::insert`](crate::Ring::insert); hands the rejected item back.
#[derive(Clone, PartialEq, Eq)]
pub struct TryInsertError<T> {
    pub(crate) err: Error,
    pub(crate) val: T,
}

impl<T> fmt::Debug for TryInsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryInsertError")
            .field("kind", &self.err)
            .finish()
    }
}

impl<T> fmt::Display for TryInsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl<T: core::any::Any> std::error::Error for TryInsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl<T> TryInsertError<T> {
    pub fn is_capacity_exceeded(&self) -> bool {
        self.err.is_capacity_exceeded()
    }

    pub fn is_invalid_handle(&self) -> bool {
        self.err.is_invalid_handle()
    }

    pub fn into_inner(self) -> T {
        self.val
    }

    pub fn into_error(self) -> Error {
        self.err
    }
}

impl<T> From<TryInsertError<T>> for Error {
    fn from(e: TryInsertError<T>) -> Self {
        e.err
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
