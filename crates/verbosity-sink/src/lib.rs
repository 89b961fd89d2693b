#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! crates/verbosity-sink/src/lib.rs
//!
//! # Overview
//!
//! `verbosity-sink` provides concrete [`ReportSink`](verbosity::ReportSink)
//! implementations for the `verbosity` debug facility. The facility decides
//! whether a trace line is emitted; the sinks here decide where it goes.
//!
//! # Design
//!
//! [`WriterSink`] renders `category: line` into any [`std::io::Write`]
//! implementor, reusing a scratch buffer between lines. Callers control
//! whether each line ends with a newline by selecting a [`LineMode`].
//!
//! With the `tracing` feature, `TracingSink` forwards approved lines to the
//! `tracing` ecosystem and `DebugLayer` lets plain `tracing` macros be gated
//! by a facility's category thresholds.
//!
//! # Invariants
//!
//! - A line is written with one `write_all` call, so concurrent reporters do
//!   not interleave within a line.
//! - `LineMode::WithNewline` prints each diagnostic on its own line and is
//!   the default.
//!
//! # Errors
//!
//! [`WriterSink`] retains the first [`std::io::Error`] raised by its writer
//! and drops later lines until the error is taken with
//! [`WriterSink::take_error`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use verbosity::{debug_print, DebugConfig, DebugFacility};
//! use verbosity_sink::WriterSink;
//!
//! let config = DebugConfig::parse("search2,stats")?;
//! let sink = Arc::new(WriterSink::new(Vec::new()));
//! let debug = DebugFacility::with_config(sink.clone(), &config);
//!
//! debug_print!(debug, "search", 2, "arrival {}", 1.5);
//! debug_print!(debug, "stats", 2, "suppressed");
//! drop(debug);
//!
//! let sink = Arc::try_unwrap(sink).ok().unwrap();
//! assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "search: arrival 1.5\n");
//! # Ok::<(), verbosity::ParseLevelError>(())
//! ```

#[cfg(feature = "tracing")]
mod tracing_bridge;
mod writer;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::{DebugLayer, REPORT_TARGET, TracingSink};
pub use writer::{LineMode, WriterSink};
