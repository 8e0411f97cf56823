//! SharedEventLog Tests
//!
//! Tests verify:
//! - Same recording/rendering behavior as the plain log
//! - Concurrent writers lose no entries
//! - Per-writer order survives interleaving

use std::sync::Arc;
use std::thread;

use inventory_eventlog::{Config, EventLog, LineSeparator, SharedEventLog};

fn lf_config() -> Config {
    Config::builder().line_separator(LineSeparator::Lf).build()
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_shared_log_is_empty() {
    let log: SharedEventLog<u32> = SharedEventLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.snapshot().is_empty());
}

#[test]
fn test_record_and_render() {
    let log = SharedEventLog::with_config(lf_config());
    log.record("CREATED", "item A");
    log.record("UPDATED", "item A qty=2");

    assert_eq!(
        log.render_records(|e, d| format!("{}: {}", e, d)),
        "CREATED: item A\nUPDATED: item A qty=2\n"
    );
}

#[test]
fn test_snapshot_is_a_copy() {
    let log = SharedEventLog::with_config(lf_config());
    log.record(1u8, "one");

    let snapshot = log.snapshot();
    log.record(2u8, "two");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_try_render_error_leaves_log_intact() {
    let log = SharedEventLog::with_config(lf_config());
    log.record(1u8, "one");

    let result: Result<String, &str> = log.try_render_records(|_, _| Err("nope"));
    assert_eq!(result, Err("nope"));
    assert_eq!(log.len(), 1);
}

#[test]
fn test_renderer_reads_snapshot_taken_beforehand() {
    let log = SharedEventLog::with_config(lf_config());
    log.record("CREATED", "item A");
    log.record("UPDATED", "item A qty=2");

    // Renderers must not call back into the log; they work from a copy.
    let snapshot = log.snapshot();
    let rendered = log.render_records(|e, d| format!("{} {}: {}", snapshot.len(), e, d));
    assert_eq!(rendered, "2 CREATED: item A\n2 UPDATED: item A qty=2\n");
    assert_eq!(log.len(), 2);
}

#[test]
fn test_from_and_into_inner() {
    let mut plain = EventLog::with_config(lf_config());
    plain.record('a', "first");

    let shared = SharedEventLog::from(plain);
    shared.record('b', "second");

    let plain = shared.into_inner();
    assert_eq!(plain.len(), 2);
    assert_eq!(*plain.records()[1].event(), 'b');
}

// =============================================================================
// Concurrent Access Tests
// =============================================================================

#[test]
fn test_concurrent_writes() {
    let log = Arc::new(SharedEventLog::with_config(lf_config()));

    let mut handles = vec![];

    for writer in 0..10usize {
        let log = Arc::clone(&log);
        let handle = thread::spawn(move || {
            for seq in 0..100usize {
                log.record(writer, format!("{}", seq));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(log.len(), 1000);

    // Each writer's entries appear in the order that writer recorded them
    let snapshot = log.snapshot();
    for writer in 0..10usize {
        let seqs: Vec<usize> = snapshot
            .iter()
            .filter(|e| *e.event() == writer)
            .map(|e| e.description().parse().unwrap())
            .collect();
        assert_eq!(seqs, (0..100).collect::<Vec<_>>());
    }
}

#[test]
fn test_concurrent_reads_during_writes() {
    let log = Arc::new(SharedEventLog::with_config(lf_config()));
    log.record(0u32, "seed");

    let writer = {
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for i in 1..=200u32 {
                log.record(i, "tick");
            }
        })
    };

    let mut readers = vec![];
    for _ in 0..4 {
        let log = Arc::clone(&log);
        readers.push(thread::spawn(move || {
            for _ in 0..50 {
                let rendered = log.render_records(|e, _| e.to_string());
                // Always a whole number of lines
                assert!(rendered.ends_with('\n'));
                assert!(rendered.starts_with("0\n"));
            }
        }));
    }

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(log.len(), 201);
}
