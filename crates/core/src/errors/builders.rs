//! Builder methods for creating errors with context

use super::types::{BoxError, Error, Result};

impl Error {
    /// Create a release error for the closer registered under `id`
    #[must_use]
    pub fn release(id: u64, source: impl Into<BoxError>) -> Self {
        Error::Release {
            id,
            source: source.into(),
        }
    }

    /// Create an aggregate error from individual failures
    #[must_use]
    pub fn aggregate(errors: Vec<Error>) -> Self {
        Error::Aggregate { errors }
    }

    /// Fold collected failures into a result: `Ok` when nothing failed
    pub fn from_failures(errors: Vec<Error>) -> Result<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::aggregate(errors))
        }
    }
}
