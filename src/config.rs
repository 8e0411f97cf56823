//! Configuration for the event log
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventLogError;

/// Configuration for an `EventLog` instance
///
/// Serialized alongside the log so a restored log renders the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Rendering Configuration
    // -------------------------------------------------------------------------
    /// Terminator written after every rendered entry
    pub line_separator: LineSeparator,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Number of entries to reserve up front
    pub initial_capacity: usize,
}

/// Line terminator used by `render_records`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\n`
    Lf,

    /// `\r\n`
    CrLf,

    /// The platform's separator (`\r\n` on Windows, `\n` elsewhere)
    #[default]
    Native,
}

impl LineSeparator {
    /// The terminator as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
            LineSeparator::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineSeparator::Lf => "lf",
            LineSeparator::CrLf => "crlf",
            LineSeparator::Native => "native",
        };
        f.write_str(name)
    }
}

impl FromStr for LineSeparator {
    type Err = EventLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineSeparator::Lf),
            "crlf" => Ok(LineSeparator::CrLf),
            "native" => Ok(LineSeparator::Native),
            other => Err(EventLogError::Config(format!(
                "unknown line separator '{}' (expected lf, crlf or native)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_separator: LineSeparator::Native,
            initial_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the line separator written after each rendered entry
    pub fn line_separator(mut self, separator: LineSeparator) -> Self {
        self.config.line_separator = separator;
        self
    }

    /// Set the number of entries reserved when the log is created
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
