//! Error types for closer release operations

mod builders;
mod display;
mod types;

pub use types::{BoxError, Error, Result};
