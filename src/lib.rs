//! # inventory-eventlog
//!
//! An append-only log of typed events for inventory build and update
//! operations:
//! - Entries pair a caller-defined event enum with a description
//! - Insertion order is preserved and recorded entries never change
//! - The whole history renders through one caller-supplied formatter
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Embedding System                          │
//! │           (inventory build / update pipeline)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ record(event, description)
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌──────────────┐         ┌────────────────┐
//!   │   EventLog   │◄────────│ SharedEventLog │
//!   │  (Vec<Entry>)│         │    (RwLock)    │
//!   └──────┬───────┘         └────────────────┘
//!          │ render_records(renderer)
//!          ▼
//!   ┌──────────────┐
//!   │   Renderer   │
//!   │ (closure or  │
//!   │  Template)   │
//!   └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use inventory_eventlog::{Config, EventLog, LineSeparator};
//!
//! #[derive(Debug)]
//! enum Event { Created, Updated }
//!
//! let config = Config::builder().line_separator(LineSeparator::Lf).build();
//! let mut log = EventLog::with_config(config);
//! log.record(Event::Created, "item A");
//! log.record(Event::Updated, "item A qty=2");
//!
//! let rendered = log.render_records(|e, d| format!("{:?}: {}", e, d));
//! assert_eq!(rendered, "Created: item A\nUpdated: item A qty=2\n");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod render;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EventLogError, Result};
pub use config::{Config, LineSeparator};
pub use log::{Entry, EventLog, SharedEventLog};
pub use render::Template;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of inventory-eventlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
