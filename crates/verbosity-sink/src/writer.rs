//! crates/verbosity-sink/src/writer.rs
//! Writer-backed report sink and its line termination mode.

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use verbosity::ReportSink;

/// Controls whether a [`WriterSink`] appends a trailing newline after each line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered line.
    #[default]
    WithNewline,
    /// Emit the rendered line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when rendering a line.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`], `false` selects [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

/// Report sink that renders `category: line` into an [`io::Write`] target.
///
/// The writer sits behind a mutex together with a reusable scratch buffer, so
/// one sink can be shared by every thread that reports through a
/// [`DebugFacility`](verbosity::DebugFacility). Each line is rendered into the
/// scratch buffer first and written with a single `write_all`, which keeps
/// lines from different threads from interleaving.
///
/// [`ReportSink::report_line`] has no error channel. The first I/O error is
/// retained instead: later lines are dropped until [`take_error`](Self::take_error)
/// hands the error to the caller.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use verbosity::{debug_print, DebugFacility};
/// use verbosity_sink::WriterSink;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let debug = DebugFacility::new(sink.clone());
/// debug.set_level("search", 1);
///
/// debug_print!(debug, "search", 1, "visited {} vertices", 3);
/// drop(debug);
///
/// let sink = Arc::try_unwrap(sink).ok().unwrap();
/// assert_eq!(sink.into_inner(), b"search: visited 3 vertices\n".to_vec());
/// ```
///
/// Render a line without appending a newline:
///
/// ```
/// use verbosity::ReportSink;
/// use verbosity_sink::{LineMode, WriterSink};
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.report_line("bfs", format_args!("queued"));
/// assert_eq!(sink.into_inner(), b"bfs: queued".to_vec());
/// ```
#[doc(alias = "reportLine")]
pub struct WriterSink<W> {
    state: Mutex<WriterState<W>>,
}

struct WriterState<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
    error: Option<io::Error>,
}

impl<W> WriterState<W>
where
    W: Write,
{
    fn render(&mut self, category: &str, line: fmt::Arguments<'_>) -> io::Result<()> {
        self.scratch.clear();
        write!(self.scratch, "{category}: {line}")
            .map_err(|_| io::Error::other("formatting trace line failed"))?;
        if self.line_mode.append_newline() {
            self.scratch.push('\n');
        }
        self.writer.write_all(self.scratch.as_bytes())
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink that writes to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> WriterSink<W> {
    /// Creates a new sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(WriterState {
                writer,
                scratch: String::new(),
                line_mode,
                error: None,
            }),
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Updates the [`LineMode`] used for subsequent lines.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Removes and returns the retained I/O error, re-enabling output.
    pub fn take_error(&self) -> Option<io::Error> {
        self.lock().error.take()
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, WriterState<W>> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Renders a line and reports the write result directly.
    ///
    /// Unlike [`ReportSink::report_line`], this bypasses the retained error
    /// and returns any I/O failure to the caller.
    pub fn write_line(&self, category: &str, line: fmt::Arguments<'_>) -> io::Result<()> {
        self.lock().render(category, line)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl<W> ReportSink for WriterSink<W>
where
    W: Write + Send,
{
    fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        let mut state = self.lock();
        if state.error.is_some() {
            return;
        }
        if let Err(error) = state.render(category, line) {
            state.error = Some(error);
        }
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("WriterSink")
            .field("writer", &state.writer)
            .field("line_mode", &state.line_mode)
            .field("error", &state.error)
            .finish()
    }
}
