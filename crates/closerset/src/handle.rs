//! Caller-facing handle to one registered closer

use crate::registry::SetState;
use closerset_core::{BoxError, Closer, Error, Result};
use parking_lot::Mutex;
use std::sync::Weak;

/// Releases a single closer recorded in a [`CloserSet`](crate::CloserSet).
///
/// The handle owns only the identifier; the set owns the closer. Closing is
/// idempotent, and a handle whose set has been closed or dropped does nothing.
#[derive(Clone)]
pub struct CloserHandle {
    id: u64,
    set: Weak<Mutex<SetState>>,
}

impl CloserHandle {
    pub(crate) fn new(id: u64, set: Weak<Mutex<SetState>>) -> Self {
        Self { id, set }
    }

    /// Identifier assigned at registration
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Release the wrapped closer once.
    ///
    /// The record is removed under the set's lock and the closer runs after
    /// the lock is released. Later calls return `Ok(())` without invoking it.
    pub fn close(&self) -> Result<()> {
        let Some(set) = self.set.upgrade() else {
            return Ok(());
        };

        // Bind first so the guard is dropped before the closer runs
        let closer = set.lock().take(self.id);
        let Some(mut closer) = closer else {
            tracing::trace!(id = self.id, "closer already released");
            return Ok(());
        };

        tracing::debug!(id = self.id, "releasing closer");
        closer.close().map_err(|source| {
            tracing::warn!(id = self.id, error = %source, "closer failed to release");
            Error::release(self.id, source)
        })
    }
}

impl Closer for CloserHandle {
    fn close(&mut self) -> std::result::Result<(), BoxError> {
        CloserHandle::close(self).map_err(Into::into)
    }
}

impl std::fmt::Debug for CloserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloserHandle")
            .field("id", &self.id)
            .field("attached", &(self.set.strong_count() > 0))
            .finish()
    }
}
