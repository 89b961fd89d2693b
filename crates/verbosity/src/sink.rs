//! crates/verbosity/src/sink.rs
//! Report sink capability consumed by the debug facility.

use std::fmt;
use std::sync::Mutex;

/// Destination for trace lines that passed the debug check.
///
/// The facility hands over the category tag together with the formatted
/// message. Rendering, buffering, and error handling belong to the sink.
/// Implementations are shared between threads, so they take `&self` and use
/// interior mutability where they need state.
pub trait ReportSink: Send + Sync {
    /// Renders or dispatches a single approved line.
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>);
}

impl<S> ReportSink for &S
where
    S: ReportSink + ?Sized,
{
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        (**self).report_line(category, line);
    }
}

impl<S> ReportSink for std::sync::Arc<S>
where
    S: ReportSink + ?Sized,
{
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        (**self).report_line(category, line);
    }
}

/// Sink that discards every line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report_line(&self, _category: &str, _line: fmt::Arguments<'_>) {}
}

/// Trace line captured by a [`CollectingSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportedLine {
    /// Category tag the line was emitted under.
    pub category: String,
    /// Rendered message.
    pub line: String,
}

/// Sink that buffers rendered lines in memory until drained.
///
/// Useful for tests and for hosts that forward diagnostics in batches.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<ReportedLine>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every buffered line in emission order.
    pub fn drain(&self) -> Vec<ReportedLine> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of buffered lines.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportedLine>> {
        self.lines
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl ReportSink for CollectingSink {
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        let line = ReportedLine {
            category: category.to_owned(),
            line: line.to_string(),
        };
        self.lock().push(line);
    }
}
