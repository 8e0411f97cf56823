//! Shared Event Log
//!
//! Thread-safe wrapper for embedding systems with more than one writer.

use parking_lot::RwLock;

use crate::config::Config;

use super::{Entry, EventLog};

/// An `EventLog` guarded by a read/write lock
///
/// ## Concurrency:
/// - `record`: exclusive write lock, so appends are serialized
/// - `len`/`snapshot`/rendering: shared read lock, many concurrent readers
/// - All methods use `&self`; share across threads with `Arc`
///
/// Renderers run while the read lock is held and must not call back into
/// the same log: `parking_lot` read locks are not reentrant, so even `len`
/// or `snapshot` from inside a renderer can deadlock once a writer waits.
/// Take a `snapshot` before rendering if the renderer needs the history.
#[derive(Debug)]
pub struct SharedEventLog<E> {
    inner: RwLock<EventLog<E>>,
}

impl<E> SharedEventLog<E> {
    /// Create a new empty shared log with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new empty shared log with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: RwLock::new(EventLog::with_config(config)),
        }
    }

    /// Record a new event (write lock)
    pub fn record(&self, event: E, description: impl Into<String>) {
        self.inner.write().record(event, description);
    }

    /// Number of recorded events (read lock)
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if nothing has been recorded yet (read lock)
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Render every entry (read lock)
    pub fn render_records<F>(&self, renderer: F) -> String
    where
        F: FnMut(&E, &str) -> String,
    {
        self.inner.read().render_records(renderer)
    }

    /// Render every entry with a renderer that may fail (read lock)
    pub fn try_render_records<F, RE>(&self, renderer: F) -> Result<String, RE>
    where
        F: FnMut(&E, &str) -> Result<String, RE>,
    {
        self.inner.read().try_render_records(renderer)
    }

    /// Unwrap into the plain log once all writers are done
    pub fn into_inner(self) -> EventLog<E> {
        self.inner.into_inner()
    }
}

impl<E> Default for SharedEventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> SharedEventLog<E> {
    /// Copy of every entry recorded so far (read lock)
    pub fn snapshot(&self) -> Vec<Entry<E>> {
        self.inner.read().records().to_vec()
    }
}

impl<E> From<EventLog<E>> for SharedEventLog<E> {
    fn from(log: EventLog<E>) -> Self {
        Self {
            inner: RwLock::new(log),
        }
    }
}
