//! Exactly-once release of an open-ended set of closers.
//!
//! A [`CloserSet`] records closers and hands back a [`CloserHandle`] for each.
//! A closer is released either when its handle is closed or when the whole set
//! is closed (or dropped), never both.
//!
//! ## Key Components
//!
//! - **`registry`**: [`CloserSet`], the lock-guarded map from identifier to
//!   closer.
//! - **`handle`**: [`CloserHandle`], an idempotent, non-owning token for one
//!   record. It is itself a [`Closer`], so handles compose across sets.
//! - **`config`**: [`CloserSetConfig`], initial capacity of the closer map.
//!
//! ## Example
//!
//! ```rust
//! use closerset::{closer_fn, CloserSet};
//!
//! let set = CloserSet::new();
//! let handle = set.register(closer_fn(|| Ok::<(), std::io::Error>(())));
//!
//! handle.close()?;
//! handle.close()?; // no-op
//! set.close_all()?;
//! # Ok::<(), closerset::Error>(())
//! ```

pub mod config;
pub mod handle;
pub mod registry;

pub use closerset_core::{closer_fn, BoxError, Closer, Error, FnCloser, Result};
pub use config::CloserSetConfig;
pub use handle::CloserHandle;
pub use registry::CloserSet;
