//! Core error type definitions

/// Opaque error returned by a release-action
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for closer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for closer operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single closer failed to release
    Release {
        id: u64,
        #[source]
        source: BoxError,
    },

    /// One or more closers failed while a whole set was being released
    Aggregate { errors: Vec<Error> },
}

impl Error {
    /// Identifier of the closer that failed, if this is a single failure
    pub fn id(&self) -> Option<u64> {
        match self {
            Error::Release { id, .. } => Some(*id),
            Error::Aggregate { .. } => None,
        }
    }

    /// Every individual failure carried by this error
    ///
    /// A single `Release` yields itself; an `Aggregate` yields its members.
    pub fn failures(&self) -> &[Error] {
        match self {
            Error::Release { .. } => std::slice::from_ref(self),
            Error::Aggregate { errors } => errors,
        }
    }
}
