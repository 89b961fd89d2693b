#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! crates/verbosity/src/lib.rs
//!
//! # Overview
//!
//! `verbosity` is a conditional tracing facility. Call sites tag diagnostic
//! statements with a category name and an integer level; a [`DebugFacility`]
//! decides whether the statement is evaluated at all. Operators enable
//! per-subsystem trace output at startup (for example from a
//! `--debug=search2,stats` option) without recompiling.
//!
//! # Design
//!
//! The facility keeps a [`CategoryRegistry`] mapping category names to
//! thresholds, plus a cached enable flag that is set as soon as any category
//! has been configured. [`DebugFacility::check`] reads the flag first and
//! only consults the registry when it is set, so an unconfigured process pays
//! a single atomic load per call site.
//!
//! [`debug_print!`] wraps the predicate and the hand-off to the
//! [`ReportSink`]. It expands inline, which means format arguments are not
//! evaluated when the check fails.
//!
//! # Invariants
//!
//! - The enable flag is true iff the registry holds at least one entry. It
//!   never resets for the lifetime of the facility.
//! - Categories that were never set read as level 0.
//! - Once any category is configured, `check(c, 0)` passes for every `c`.
//! - [`DebugFacility::stats_level`] mirrors the [`STATS_CATEGORY`] threshold.
//!
//! # Errors
//!
//! Registry operations are total. Only the configuration parser
//! ([`ParseLevelError`]) and the process-wide install slot
//! ([`AlreadyInstalled`]) report errors.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use verbosity::{debug_print, CollectingSink, DebugFacility};
//!
//! let sink = Arc::new(CollectingSink::new());
//! let debug = DebugFacility::new(sink.clone());
//! debug.set_level("search", 2);
//!
//! debug_print!(debug, "search", 1, "visited {} vertices", 42);
//! debug_print!(debug, "search", 3, "too chatty: {}", 7);
//!
//! let lines = sink.drain();
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].category, "search");
//! assert_eq!(lines[0].line, "visited 42 vertices");
//! ```
//!
//! # See also
//!
//! - `verbosity-sink` for writer and `tracing` backed report sinks.

mod config;
mod facility;
mod global;
mod macros;
mod registry;
mod sink;

pub use config::{DebugConfig, LevelSetting, ParseLevelError, ParseLevelErrorKind};
pub use facility::DebugFacility;
pub use global::{AlreadyInstalled, global, install};
pub use registry::CategoryRegistry;
pub use sink::{CollectingSink, NullSink, ReportSink, ReportedLine};

/// Verbosity threshold associated with a category.
///
/// Signed so that negative thresholds can be stored; they never satisfy a
/// request at level 1 or above.
pub type Level = i32;

/// Category whose threshold is cached for [`DebugFacility::stats_level`].
pub const STATS_CATEGORY: &str = "stats";
