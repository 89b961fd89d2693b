//! Integration tests for `debug_print!` emission behaviour.
//!
//! The macro must forward approved lines with their category tag and must not
//! evaluate format arguments when the check fails.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use verbosity::{CollectingSink, DebugFacility, ReportedLine, debug_print};

fn facility() -> (Arc<CollectingSink>, DebugFacility) {
    let sink = Arc::new(CollectingSink::new());
    let debug = DebugFacility::new(sink.clone());
    (sink, debug)
}

fn counted(counter: &AtomicUsize) -> usize {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

// ============================================================================
// Lazy Evaluation Tests
// ============================================================================

/// Verifies arguments are skipped on a facility with nothing configured.
#[test]
fn arguments_skipped_when_facility_disabled() {
    let (sink, debug) = facility();
    let counter = AtomicUsize::new(0);

    debug_print!(debug, "search", 0, "call {}", counted(&counter));
    debug_print!(debug, "search", 1, "call {}", counted(&counter));

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(sink.is_empty());
}

/// Verifies arguments are skipped when the category level is too low.
#[test]
fn arguments_skipped_when_level_insufficient() {
    let (sink, debug) = facility();
    debug.set_level("search", 1);
    let counter = AtomicUsize::new(0);

    debug_print!(debug, "search", 2, "call {}", counted(&counter));
    debug_print!(debug, "other", 1, "call {}", counted(&counter));

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert!(sink.is_empty());
}

/// Verifies arguments are evaluated exactly once when the check passes.
#[test]
fn arguments_evaluated_once_when_enabled() {
    let (sink, debug) = facility();
    debug.set_level("search", 2);
    let counter = AtomicUsize::new(0);

    debug_print!(debug, "search", 2, "call {}", counted(&counter));

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(sink.drain()[0].line, "call 1");
}

/// Verifies expensive rendering is avoided entirely for disabled call sites.
#[test]
fn expensive_debug_formatting_is_skipped() {
    struct Loud<'a>(&'a AtomicUsize);

    impl std::fmt::Display for Loud<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("rendered")
        }
    }

    let (sink, debug) = facility();
    debug.set_level("levelize", 1);
    let renders = AtomicUsize::new(0);

    debug_print!(debug, "levelize", 3, "{}", Loud(&renders));
    assert_eq!(renders.load(Ordering::SeqCst), 0);

    debug_print!(debug, "levelize", 1, "{}", Loud(&renders));
    assert_eq!(renders.load(Ordering::SeqCst), 1);
    assert_eq!(sink.drain()[0].line, "rendered");
}

// ============================================================================
// Emission Tests
// ============================================================================

/// Verifies lines reach the sink in order with their category tags.
#[test]
fn lines_are_forwarded_in_order() {
    let (sink, debug) = facility();
    debug.set_level("search", 1);
    debug.set_level("bfs", 2);

    debug_print!(debug, "search", 1, "first");
    debug_print!(debug, "bfs", 2, "second {}", 2);
    debug_print!(debug, "search", 1, "third {x}", x = 3);

    assert_eq!(
        sink.drain(),
        vec![
            ReportedLine {
                category: "search".to_owned(),
                line: "first".to_owned(),
            },
            ReportedLine {
                category: "bfs".to_owned(),
                line: "second 2".to_owned(),
            },
            ReportedLine {
                category: "search".to_owned(),
                line: "third 3".to_owned(),
            },
        ]
    );
}

/// Verifies level 0 call sites emit for any category once enabled.
#[test]
fn level_zero_call_site_emits_once_enabled() {
    let (sink, debug) = facility();
    debug_print!(debug, "unset", 0, "before");
    assert!(sink.is_empty());

    debug.set_level("search", 1);
    debug_print!(debug, "unset", 0, "after");
    assert_eq!(sink.drain()[0].line, "after");
}

/// Verifies empty and unicode messages are passed through unchanged.
#[test]
fn message_content_is_preserved() {
    let (sink, debug) = facility();
    debug.set_level("search", 1);

    debug_print!(debug, "search", 1, "");
    debug_print!(debug, "search", 1, "délai {}", "→ 3ns");

    let lines: Vec<_> = sink.drain().into_iter().map(|l| l.line).collect();
    assert_eq!(lines, ["", "délai → 3ns"]);
}
