/// Sizing of a [`Ring`](crate::Ring) arena.
///
/// ```
/// use clist_rs::{Config, Ring};
///
/// let rings: Ring<u32> = Ring::with_config(Config::new().capacity(64).max_nodes(128));
/// assert_eq!(rings.max_nodes(), Some(128));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) capacity: usize,
    pub(crate) max_nodes: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of node slots allocated up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Upper bound on live nodes across every ring of the arena. Node
    /// creation past this bound fails with
    /// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded).
    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}
