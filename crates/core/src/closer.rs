//! The release-action capability
//!
//! A [`Closer`] is anything that can be released exactly once through a single
//! fallible operation: a file, a connection, a subscription, or a handle into
//! another closer set. The registry never inspects what a closer does.

use crate::errors::BoxError;

/// A resource exposing a single release operation
pub trait Closer: Send {
    /// Release the resource
    fn close(&mut self) -> Result<(), BoxError>;
}

impl<C: Closer + ?Sized> Closer for Box<C> {
    fn close(&mut self) -> Result<(), BoxError> {
        (**self).close()
    }
}

/// Closer backed by a one-shot function
///
/// The function runs on the first `close`; later calls return `Ok(())`.
pub struct FnCloser<F> {
    close_fn: Option<F>,
}

impl<F> FnCloser<F> {
    /// Wrap a release function
    pub fn new(close_fn: F) -> Self {
        Self {
            close_fn: Some(close_fn),
        }
    }
}

impl<F, E> Closer for FnCloser<F>
where
    F: FnOnce() -> Result<(), E> + Send,
    E: Into<BoxError>,
{
    fn close(&mut self) -> Result<(), BoxError> {
        match self.close_fn.take() {
            Some(close_fn) => close_fn().map_err(Into::into),
            None => Ok(()),
        }
    }
}

impl<F> std::fmt::Debug for FnCloser<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCloser")
            .field("pending", &self.close_fn.is_some())
            .finish()
    }
}

/// Adapt a release function into a [`Closer`]
pub fn closer_fn<F, E>(close_fn: F) -> FnCloser<F>
where
    F: FnOnce() -> Result<(), E> + Send,
    E: Into<BoxError>,
{
    FnCloser::new(close_fn)
}
