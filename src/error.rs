//! Error types for the event log
//!
//! Renderer failures never pass through this type: they are returned to the
//! caller exactly as the renderer produced them. `EventLogError` covers the
//! crate's own surfaces (configuration and CLI input).

use thiserror::Error;

/// Result type alias using EventLogError
pub type Result<T> = std::result::Result<T, EventLogError>;

/// Unified error type for event log configuration and input parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventLogError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}
