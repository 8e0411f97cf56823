//! Log Entry definitions
//!
//! Defines a single immutable (event, description) record.

use std::fmt;

use serde::Serialize;

/// A single entry in the event log
///
/// Entries are only created by [`EventLog::record`](super::EventLog::record)
/// and expose no setters, so a recorded entry never changes. Deserializing
/// an `EventLog` replays its entries through `record`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry<E> {
    /// Kind of operation recorded
    event: E,

    /// Human-readable description of the operation
    description: String,
}

impl<E> Entry<E> {
    /// Create a new entry. No validation: empty descriptions are kept as-is.
    pub(crate) fn new(event: E, description: String) -> Self {
        Self { event, description }
    }

    /// Get the event
    pub fn event(&self) -> &E {
        &self.event
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render this entry with a caller-supplied formatter
    ///
    /// Whatever the renderer returns is passed through unchanged.
    pub fn render<F>(&self, renderer: F) -> String
    where
        F: FnOnce(&E, &str) -> String,
    {
        renderer(&self.event, &self.description)
    }

    /// Render this entry with a formatter that may fail
    ///
    /// The renderer's error is returned untouched.
    pub fn try_render<F, RE>(&self, renderer: F) -> Result<String, RE>
    where
        F: FnOnce(&E, &str) -> Result<String, RE>,
    {
        renderer(&self.event, &self.description)
    }

    /// Consume the entry, returning the owned (event, description) pair
    pub fn into_parts(self) -> (E, String) {
        (self.event, self.description)
    }
}

impl<E: fmt::Display> fmt::Display for Entry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.event, self.description)
    }
}
