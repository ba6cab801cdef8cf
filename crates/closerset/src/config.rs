//! Configuration for closer set behavior.

/// Default number of slots reserved whenever the closer map is (re)created
const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for a [`CloserSet`](crate::CloserSet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloserSetConfig {
    /// Pre-allocated capacity of the closer map
    pub initial_capacity: usize,
}

impl Default for CloserSetConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl CloserSetConfig {
    /// Override the initial map capacity
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
