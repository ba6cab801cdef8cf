//! Registry of closers that are released exactly once
//!
//! Every closer recorded in a [`CloserSet`] is released either through the
//! [`CloserHandle`] returned at registration or by [`CloserSet::close_all`],
//! whichever removes it from the map first.

use crate::config::CloserSetConfig;
use crate::handle::CloserHandle;
use closerset_core::{Closer, Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type ClosersMap = HashMap<u64, Box<dyn Closer>>;

/// State guarded by the set's lock
pub(crate) struct SetState {
    /// `None` once the set has been closed
    closers: Option<ClosersMap>,
    next_id: u64,
}

impl SetState {
    fn new(capacity: usize) -> Self {
        Self {
            closers: Some(HashMap::with_capacity(capacity)),
            next_id: 0,
        }
    }

    /// Record a closer under a fresh identifier, reopening the map if needed
    fn insert(&mut self, closer: Box<dyn Closer>, capacity: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.closers
            .get_or_insert_with(|| HashMap::with_capacity(capacity))
            .insert(id, closer);

        id
    }

    /// Remove a single closer, if the set is open and still holds it
    pub(crate) fn take(&mut self, id: u64) -> Option<Box<dyn Closer>> {
        self.closers.as_mut()?.remove(&id)
    }

    /// Detach every remaining closer and mark the set closed
    fn take_all(&mut self) -> Option<ClosersMap> {
        self.closers.take()
    }
}

/// Records a set of closers; all of them are released when the set closes.
///
/// Closing a [`CloserHandle`] removes its record, so each closer runs once.
pub struct CloserSet {
    state: Arc<Mutex<SetState>>,
    config: CloserSetConfig,
}

impl CloserSet {
    /// Create an empty set with default configuration
    pub fn new() -> Self {
        Self::with_config(CloserSetConfig::default())
    }

    /// Create an empty set with the given configuration
    pub fn with_config(config: CloserSetConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SetState::new(config.initial_capacity))),
            config,
        }
    }

    /// Record a closer and return a handle that releases it once.
    ///
    /// The closer is moved into the set; from here on only the handle or
    /// [`close_all`](Self::close_all) invokes it.
    pub fn register<C>(&self, closer: C) -> CloserHandle
    where
        C: Closer + 'static,
    {
        let id = self
            .state
            .lock()
            .insert(Box::new(closer), self.config.initial_capacity);

        tracing::debug!(id, "registered closer");
        CloserHandle::new(id, Arc::downgrade(&self.state))
    }

    /// Release every closer still recorded in the set.
    ///
    /// Every closer is attempted even when earlier ones fail; all failures are
    /// returned together as [`Error::Aggregate`]. Calling this on a closed set
    /// is a no-op.
    ///
    /// The whole map is detached under the lock and the closers run after it
    /// is released, so a closer may call back into this set (for example a
    /// handle registered into its own set).
    ///
    /// The set is not sealed: a later [`register`](Self::register) reopens it
    /// with a fresh map, and identifiers keep increasing.
    pub fn close_all(&self) -> Result<()> {
        let detached = self.state.lock().take_all();
        let errors = detached.map(release_all).unwrap_or_default();

        Error::from_failures(errors)
    }

    /// Number of closers not yet released
    pub fn len(&self) -> usize {
        self.state.lock().closers.as_ref().map_or(0, HashMap::len)
    }

    /// Whether no closers are waiting to be released
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the set has been closed and not reopened by a registration
    pub fn is_closed(&self) -> bool {
        self.state.lock().closers.is_none()
    }

    /// The configuration this set was created with
    pub fn config(&self) -> &CloserSetConfig {
        &self.config
    }
}

/// Release detached closers, collecting every failure
fn release_all(closers: ClosersMap) -> Vec<Error> {
    tracing::debug!(count = closers.len(), "releasing closer set");

    let mut errors = Vec::new();
    for (id, mut closer) in closers {
        if let Err(source) = closer.close() {
            tracing::warn!(id, error = %source, "closer failed to release");
            errors.push(Error::release(id, source));
        }
    }
    errors
}

impl Default for CloserSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CloserSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CloserSet")
            .field("pending", &state.closers.as_ref().map_or(0, HashMap::len))
            .field("closed", &state.closers.is_none())
            .field("next_id", &state.next_id)
            .finish()
    }
}

impl Drop for CloserSet {
    fn drop(&mut self) {
        if let Err(e) = self.close_all() {
            tracing::warn!("Failed to release closers on drop: {e}");
        }
    }
}
