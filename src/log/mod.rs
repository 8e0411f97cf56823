//! Event Log Module
//!
//! An ordered, append-only history of typed events.
//!
//! ## Responsibilities
//! - Append (event, description) entries in call order
//! - Expose the history as a read-only view
//! - Render every entry through one caller-supplied formatter
//!
//! ## Render Format
//! ```text
//! ┌──────────────────────┬─────┐
//! │ render(entry 1)      │ SEP │
//! ├──────────────────────┼─────┤
//! │ render(entry 2)      │ SEP │
//! ├──────────────────────┼─────┤
//! │ ...                  │ SEP │
//! └──────────────────────┴─────┘
//! ```
//! Every entry, including the last, is followed by the configured line
//! separator. An empty log renders as the empty string.

mod entry;
mod shared;

pub use entry::Entry;
pub use shared::SharedEventLog;

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::Config;
use crate::render::Template;

/// Append-only log of events paired with descriptions
///
/// Not synchronized: `record` needs `&mut self`. Wrap the log in a
/// [`SharedEventLog`] when several threads must write to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedLog<E>", bound(deserialize = "E: Deserialize<'de>"))]
pub struct EventLog<E> {
    /// Recorded entries, in insertion order
    entries: Vec<Entry<E>>,

    /// Rendering options
    config: Config,
}

/// Wire shape of an `EventLog`, rebuilt through `record` on load
#[derive(Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
struct SerializedLog<E> {
    entries: Vec<SerializedEntry<E>>,

    #[serde(default)]
    config: Config,
}

#[derive(Deserialize)]
struct SerializedEntry<E> {
    event: E,
    description: String,
}

impl<E> From<SerializedLog<E>> for EventLog<E> {
    fn from(serialized: SerializedLog<E>) -> Self {
        let mut log = EventLog::with_config(serialized.config);
        log.extend(
            serialized
                .entries
                .into_iter()
                .map(|entry| (entry.event, entry.description)),
        );
        log
    }
}

impl<E> EventLog<E> {
    /// Create a new empty event log with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new empty event log with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Get the config this log renders with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Record a new event
    pub fn record(&mut self, event: E, description: impl Into<String>) {
        self.entries.push(Entry::new(event, description.into()));
        trace!(entries = self.entries.len(), "event recorded");
    }

    /// Retrieve all recorded events, oldest first
    ///
    /// The slice borrows the log, so nothing can be recorded while it is held.
    pub fn records(&self) -> &[Entry<E>] {
        &self.entries
    }

    /// Iterate over recorded events, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<E>> {
        self.entries.iter()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every entry, each followed by the line separator
    pub fn render_records<F>(&self, mut renderer: F) -> String
    where
        F: FnMut(&E, &str) -> String,
    {
        match self.try_render_records(|event, description| {
            Ok::<_, Infallible>(renderer(event, description))
        }) {
            Ok(rendered) => rendered,
            Err(never) => match never {},
        }
    }

    /// Render every entry with a renderer that may fail
    ///
    /// Stops at the first failing entry and returns its error unchanged.
    /// No partial output is produced.
    pub fn try_render_records<F, RE>(&self, mut renderer: F) -> Result<String, RE>
    where
        F: FnMut(&E, &str) -> Result<String, RE>,
    {
        let separator = self.config.line_separator.as_str();
        let mut rendered = String::new();

        for entry in &self.entries {
            rendered.push_str(&entry.try_render(&mut renderer)?);
            rendered.push_str(separator);
        }

        debug!(
            entries = self.entries.len(),
            bytes = rendered.len(),
            "rendered event log"
        );
        Ok(rendered)
    }
}

impl<E: fmt::Display> EventLog<E> {
    /// Render every entry through a [`Template`]
    pub fn render_records_with(&self, template: &Template) -> String {
        self.render_records(|event, description| template.render(event, description))
    }
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a EventLog<E> {
    type Item = &'a Entry<E>;
    type IntoIter = std::slice::Iter<'a, Entry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, D: Into<String>> Extend<(E, D)> for EventLog<E> {
    fn extend<I: IntoIterator<Item = (E, D)>>(&mut self, iter: I) {
        for (event, description) in iter {
            self.record(event, description);
        }
    }
}

impl<E, D: Into<String>> FromIterator<(E, D)> for EventLog<E> {
    fn from_iter<I: IntoIterator<Item = (E, D)>>(iter: I) -> Self {
        let mut log = Self::new();
        log.extend(iter);
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineSeparator;

    fn lf_log() -> EventLog<&'static str> {
        EventLog::with_config(Config::builder().line_separator(LineSeparator::Lf).build())
    }

    #[test]
    fn test_new_log_is_empty() {
        let log: EventLog<u8> = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.render_records(|_, _| unreachable!()), "");
    }

    #[test]
    fn test_initial_capacity_is_reserved() {
        let log: EventLog<u8> =
            EventLog::with_config(Config::builder().initial_capacity(32).build());
        assert!(log.entries.capacity() >= 32);
        assert!(log.is_empty());
        assert_eq!(log.config().initial_capacity, 32);
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let log: EventLog<u8> =
            serde_json::from_str(r#"{"entries":[{"event":3,"description":"c"}]}"#).unwrap();
        assert_eq!(log.config(), &Config::default());
        assert_eq!(log.len(), 1);
        assert_eq!(*log.records()[0].event(), 3);
    }

    #[test]
    fn test_trailing_separator_after_last_entry() {
        let mut log = lf_log();
        log.record("A", "only");
        assert_eq!(log.render_records(|e, d| format!("{} {}", e, d)), "A only\n");
    }

    #[test]
    fn test_failure_stops_at_first_bad_entry() {
        let mut log = lf_log();
        log.record("ok", "1");
        log.record("bad", "2");
        log.record("ok", "3");

        let mut calls = 0;
        let result = log.try_render_records(|e, _| {
            calls += 1;
            if *e == "bad" {
                Err(calls)
            } else {
                Ok(e.to_string())
            }
        });

        assert_eq!(result, Err(2));
        assert_eq!(calls, 2);
    }
}
