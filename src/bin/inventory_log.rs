//! Inventory Log CLI
//!
//! Records inventory build events given on the command line and prints
//! the rendered log.

use std::fmt;

use clap::{Parser, ValueEnum};
use inventory_eventlog::{Config, EventLog, EventLogError, LineSeparator, Template};
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter};

/// Inventory Log
#[derive(Parser, Debug)]
#[command(name = "inventory-log")]
#[command(about = "Record inventory build events and print the rendered log")]
#[command(version)]
struct Args {
    /// Entry to record, as EVENT=DESCRIPTION (repeatable)
    #[arg(short, long = "entry", value_parser = parse_entry)]
    entries: Vec<(InventoryEvent, String)>,

    /// Output template ({event}, {description}, {{ and }} are recognized)
    #[arg(short, long, default_value = inventory_eventlog::render::DEFAULT_TEMPLATE)]
    template: Template,

    /// Line ending written after each entry (lf, crlf, native)
    #[arg(long, default_value = "native")]
    line_ending: LineSeparator,
}

/// Inventory build events
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum InventoryEvent {
    Created,
    Updated,
    Removed,
    Skipped,
}

impl fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InventoryEvent::Created => "CREATED",
            InventoryEvent::Updated => "UPDATED",
            InventoryEvent::Removed => "REMOVED",
            InventoryEvent::Skipped => "SKIPPED",
        };
        f.write_str(name)
    }
}

/// Parse an `EVENT=DESCRIPTION` argument
fn parse_entry(arg: &str) -> Result<(InventoryEvent, String), EventLogError> {
    let (event, description) = arg.split_once('=').ok_or_else(|| {
        EventLogError::InvalidEntry(format!("expected EVENT=DESCRIPTION, got '{}'", arg))
    })?;

    let event = InventoryEvent::from_str(event.trim(), true).map_err(|_| {
        EventLogError::InvalidEntry(format!(
            "unknown event '{}' (expected created, updated, removed or skipped)",
            event.trim()
        ))
    })?;

    Ok((event, description.to_string()))
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory_eventlog=debug"));

    tracing_fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("inventory-log v{}", inventory_eventlog::VERSION);
    tracing::info!("Template: {}", args.template);
    tracing::info!("Line ending: {}", args.line_ending);

    if args.entries.is_empty() {
        tracing::warn!("No entries given; the rendered log is empty");
    }

    let config = Config::builder()
        .line_separator(args.line_ending)
        .initial_capacity(args.entries.len())
        .build();

    let mut log = EventLog::with_config(config);
    log.extend(args.entries);

    print!("{}", log.render_records_with(&args.template));
}
