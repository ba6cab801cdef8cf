//! Core types and errors shared by the `closerset` workspace.
//!
//! ## Key Components
//!
//! - **`closer`**: The [`Closer`] trait, the single-operation release capability
//!   every registered resource exposes, plus the [`closer_fn`] adapter.
//! - **`errors`**: The [`Error`] enum and [`Result`] alias. Release failures are
//!   reported individually or aggregated when a whole set is released.

pub mod closer;
pub mod errors;

pub use self::{
    closer::{closer_fn, Closer, FnCloser},
    errors::{BoxError, Error, Result},
};
