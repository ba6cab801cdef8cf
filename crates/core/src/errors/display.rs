//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Release { id, source } => {
                write!(f, "failed to release closer #{id}: {source}")
            }
            Error::Aggregate { errors } => {
                let noun = if errors.len() == 1 { "closer" } else { "closers" };
                write!(f, "{} {noun} failed to release", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{error}")?;
                }
                Ok(())
            }
        }
    }
}
