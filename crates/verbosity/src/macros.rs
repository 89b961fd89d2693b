//! crates/verbosity/src/macros.rs
//! Call-site macros that gate diagnostics on the debug facility.
//!
//! These are macros rather than functions so the message arguments stay
//! unevaluated when the check fails: formatting a large structure, or an
//! argument with side effects, costs nothing while tracing is off.

/// Emits a trace line when `category` is enabled at `level`.
///
/// The facility and category expressions are evaluated exactly once. The
/// level expression is skipped while the facility is disabled, and the format
/// arguments are evaluated only after
/// [`DebugFacility::check`](crate::DebugFacility::check) passes; the
/// rendered line is then handed to the facility's report sink together with
/// the category tag.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use verbosity::{debug_print, CollectingSink, DebugFacility};
///
/// let sink = Arc::new(CollectingSink::new());
/// let debug = DebugFacility::new(sink.clone());
/// debug.set_level("levelize", 1);
///
/// let mut renders = 0;
/// let mut expensive = || {
///     renders += 1;
///     "graph"
/// };
///
/// debug_print!(debug, "levelize", 2, "dump {}", expensive());
/// debug_print!(debug, "levelize", 1, "levelized {} vertices", 10);
///
/// assert_eq!(renders, 0);
/// assert_eq!(sink.drain()[0].line, "levelized 10 vertices");
/// ```
#[macro_export]
macro_rules! debug_print {
    ($debug:expr, $category:expr, $level:expr, $($arg:tt)+) => {{
        let debug = &$debug;
        let category: &str = $category;
        if debug.is_enabled() && debug.check(category, $level) {
            debug.report_line(category, ::std::format_args!($($arg)+));
        }
    }};
}

/// Predicate-only form of [`debug_print!`].
///
/// Expands to [`DebugFacility::check`](crate::DebugFacility::check) so
/// guarded blocks that do more than print a line read the same way as
/// [`debug_print!`] call sites.
///
/// ```
/// use verbosity::{debug_check, DebugFacility};
///
/// let debug = DebugFacility::default();
/// assert!(!debug_check!(debug, "search", 1));
/// debug.set_level("search", 1);
/// assert!(debug_check!(debug, "search", 1));
/// ```
#[macro_export]
macro_rules! debug_check {
    ($debug:expr, $category:expr, $level:expr) => {
        $debug.check($category, $level)
    };
}
