//! Integration tests for the tracing bridge.
//!
//! These tests verify that `DebugLayer` gates ordinary tracing events on a
//! facility's category thresholds, and that `TracingSink` re-emits approved
//! lines as tracing events.

use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, Layered, SubscriberExt};
use verbosity::{CollectingSink, DebugFacility, debug_print};
use verbosity_sink::{DebugLayer, REPORT_TARGET, TracingSink};

/// Layer recording `(target, category, message)` for every event.
#[derive(Clone, Default)]
struct CaptureLayer(Arc<Mutex<Vec<(String, String, String)>>>);

#[derive(Default)]
struct FieldVisitor {
    category: String,
    message: String,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "category" => self.category = value.to_owned(),
            "message" => self.message = value.to_owned(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "category" => self.category = format!("{value:?}"),
            "message" => self.message = format!("{value:?}"),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push((
            event.metadata().target().to_owned(),
            visitor.category,
            visitor.message,
        ));
    }
}

fn layered(levels: &[(&str, i32)]) -> (Arc<CollectingSink>, Layered<DebugLayer, Registry>) {
    let sink = Arc::new(CollectingSink::new());
    let debug = Arc::new(DebugFacility::new(sink.clone()));
    for (category, level) in levels {
        debug.set_level(category, *level);
    }
    let subscriber = tracing_subscriber::registry().with(DebugLayer::new(debug));
    (sink, subscriber)
}

// ============================================================================
// DebugLayer Routing Tests
// ============================================================================

/// Verifies events are routed by the last target segment and mapped level.
#[test]
fn layer_routes_events_by_category_threshold() {
    let (sink, subscriber) = layered(&[("search", 2)]);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: "sta::search", "info passes");
        tracing::debug!(target: "sta::search", "debug passes {}", 2);
        tracing::trace!(target: "sta::search", "trace suppressed");
        tracing::info!(target: "sta::levelize", "unconfigured suppressed");
    });

    let lines = sink.drain();
    let rendered: Vec<_> = lines
        .iter()
        .map(|l| (l.category.as_str(), l.line.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![("search", "info passes"), ("search", "debug passes 2")]
    );
}

/// Verifies nothing is reported while the facility is unconfigured.
#[test]
fn layer_is_silent_without_configuration() {
    let (sink, subscriber) = layered(&[]);

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(target: "sta::search", "dropped");
        tracing::info!("dropped as well");
    });

    assert!(sink.is_empty());
}

/// Verifies configured level 3 admits trace events.
#[test]
fn trace_events_need_level_three() {
    let (sink, subscriber) = layered(&[("bfs", 3)]);

    tracing::subscriber::with_default(subscriber, || {
        tracing::trace!(target: "graph::bfs", "deep detail");
    });

    assert_eq!(sink.drain()[0].line, "deep detail");
}

// ============================================================================
// TracingSink Tests
// ============================================================================

/// Verifies approved lines become tracing events with a category field.
#[test]
fn tracing_sink_emits_events() {
    let capture = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    let debug = DebugFacility::new(Arc::new(TracingSink));
    debug.set_level("search", 1);

    tracing::subscriber::with_default(subscriber, || {
        debug_print!(debug, "search", 1, "forwarded {}", 1);
        debug_print!(debug, "search", 2, "suppressed");
    });

    let events = capture.0.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![(
            REPORT_TARGET.to_owned(),
            "search".to_owned(),
            "forwarded 1".to_owned()
        )]
    );
}

/// Verifies sink events are not fed back through a layer on the same subscriber.
#[test]
fn tracing_sink_output_is_not_rerouted() {
    let collected = Arc::new(CollectingSink::new());
    let listener = Arc::new(DebugFacility::new(collected.clone()));
    listener.set_level("report", 2);
    let subscriber = tracing_subscriber::registry().with(DebugLayer::new(listener));

    let debug = DebugFacility::new(Arc::new(TracingSink));
    debug.set_level("search", 1);

    tracing::subscriber::with_default(subscriber, || {
        debug_print!(debug, "search", 1, "forwarded");
    });

    assert!(collected.is_empty());
}
