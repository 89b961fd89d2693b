//! crates/verbosity-sink/src/tracing_bridge.rs
//! Bridge between the tracing crate and the debug facility.
//!
//! Two directions are covered:
//!
//! - [`TracingSink`] is a [`ReportSink`] that turns approved trace lines into
//!   `tracing` events, so a host that already installs a subscriber sees
//!   facility output alongside its other logs.
//! - [`DebugLayer`] is a `tracing-subscriber` layer that gates ordinary
//!   `tracing` events on a [`DebugFacility`]. The event target's last `::`
//!   segment names the category and the event level maps to a verbosity
//!   level.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use tracing_subscriber::layer::SubscriberExt;
//! use tracing_subscriber::util::SubscriberInitExt;
//! use verbosity::{DebugConfig, DebugFacility};
//! use verbosity_sink::{DebugLayer, WriterSink};
//!
//! let config = DebugConfig::parse("search2")?;
//! let debug = Arc::new(DebugFacility::with_config(Arc::new(WriterSink::stderr()), &config));
//! tracing_subscriber::registry().with(DebugLayer::new(debug)).init();
//!
//! tracing::debug!(target: "sta::search", "visited vertex");
//! # Ok::<(), verbosity::ParseLevelError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use verbosity::{DebugFacility, ReportSink};

/// Target used for events emitted by [`TracingSink`].
pub const REPORT_TARGET: &str = "verbosity::report";

/// Report sink that re-emits approved lines as `tracing` DEBUG events.
///
/// Each event carries the category in a `category` field and the rendered
/// line as its message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        tracing::debug!(target: REPORT_TARGET, category, "{line}");
    }
}

/// A tracing layer that routes events through a [`DebugFacility`].
///
/// Events whose category is enabled at the mapped level are reported through
/// the facility's sink; everything else is ignored. Events emitted by
/// [`TracingSink`] are skipped so the two halves of the bridge can be
/// installed together without feeding back into each other.
pub struct DebugLayer {
    facility: Arc<DebugFacility>,
}

impl DebugLayer {
    /// Creates a layer gated by `facility`.
    #[must_use]
    pub const fn new(facility: Arc<DebugFacility>) -> Self {
        Self { facility }
    }

    /// Borrows the gating facility.
    #[must_use]
    pub fn facility(&self) -> &DebugFacility {
        &self.facility
    }

    /// Map a tracing target to a debug category.
    fn target_to_category(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> verbosity::Level {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl fmt::Debug for DebugLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugLayer")
            .field("facility", &self.facility)
            .finish()
    }
}

impl<S> Layer<S> for DebugLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !self.facility.is_enabled() {
            return;
        }

        let metadata = event.metadata();
        let target = metadata.target();
        if target == REPORT_TARGET {
            return;
        }

        let category = Self::target_to_category(target);
        let level = Self::level_to_verbosity_level(metadata.level());
        if !self.facility.check(category, level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.facility
                .report_line(category, format_args!("{message}"));
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}
