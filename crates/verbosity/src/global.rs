//! crates/verbosity/src/global.rs
//! Optional process-wide slot for hosts that keep a single facility.
//!
//! Library code should take a `&DebugFacility` from its caller. The slot
//! exists for applications that build one facility at startup and want call
//! sites deep in the program to reach it without threading a reference
//! through every layer.

use std::sync::OnceLock;

use thiserror::Error;

use crate::facility::DebugFacility;

static GLOBAL: OnceLock<DebugFacility> = OnceLock::new();

/// Returned by [`install`] when a facility is already installed.
///
/// The rejected facility is handed back so the caller can keep using it.
#[derive(Debug, Error)]
#[error("a process-wide debug facility is already installed")]
pub struct AlreadyInstalled(pub DebugFacility);

/// Installs `facility` as the process-wide instance.
///
/// Succeeds once per process; later calls return [`AlreadyInstalled`].
///
/// ```
/// use verbosity::{debug_print, global, install, DebugFacility};
///
/// let debug = install(DebugFacility::default()).unwrap();
/// debug.set_level("search", 1);
///
/// if let Some(debug) = global() {
///     debug_print!(debug, "search", 1, "reached from anywhere");
/// }
/// assert!(install(DebugFacility::default()).is_err());
/// ```
pub fn install(facility: DebugFacility) -> Result<&'static DebugFacility, AlreadyInstalled> {
    let mut pending = Some(facility);
    let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());
    match pending {
        None => Ok(installed),
        Some(rejected) => Err(AlreadyInstalled(rejected)),
    }
}

/// Returns the process-wide facility, if one was installed.
#[inline]
pub fn global() -> Option<&'static DebugFacility> {
    GLOBAL.get()
}
