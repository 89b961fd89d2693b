//! crates/verbosity/src/facility.rs
//! Debug facility owning the category registry, enable flag, and report sink.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::DebugConfig;
use crate::registry::CategoryRegistry;
use crate::sink::{NullSink, ReportSink};
use crate::{Level, STATS_CATEGORY};

/// Conditional tracing facility.
///
/// A facility starts with an empty registry and the enable flag cleared.
/// Configuration code calls [`set_level`](Self::set_level) zero or more times,
/// usually during startup; call sites then gate their diagnostics through
/// [`check`](Self::check) or the [`debug_print!`](crate::debug_print) macro.
///
/// The registry sits behind a read-write lock and the enable flag is an
/// atomic, so a facility can be shared between threads by reference or via
/// [`Arc`]. When nothing has been configured, [`check`](Self::check) returns
/// after a single atomic load without touching the lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use verbosity::{CollectingSink, DebugFacility};
///
/// let debug = DebugFacility::new(Arc::new(CollectingSink::new()));
/// assert!(!debug.check("search", 0));
///
/// debug.set_level("search", 2);
/// assert!(debug.check("search", 1));
/// assert!(!debug.check("search", 3));
/// assert!(!debug.check("other", 1));
/// assert!(debug.check("other", 0));
/// ```
pub struct DebugFacility {
    enabled: AtomicBool,
    stats_level: AtomicI32,
    registry: RwLock<CategoryRegistry>,
    report: Arc<dyn ReportSink>,
}

impl DebugFacility {
    /// Creates a facility with no configured categories.
    ///
    /// The sink is shared: the facility keeps one reference to forward
    /// approved lines and does not otherwise manage its lifetime.
    #[must_use]
    pub fn new(report: Arc<dyn ReportSink>) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            stats_level: AtomicI32::new(0),
            registry: RwLock::new(CategoryRegistry::new()),
            report,
        }
    }

    /// Creates a facility and applies every setting from `config` in order.
    #[must_use]
    pub fn with_config(report: Arc<dyn ReportSink>, config: &DebugConfig) -> Self {
        let facility = Self::new(report);
        config.apply(&facility);
        facility
    }

    /// Sets the threshold for `category`, overwriting any previous value.
    ///
    /// Any call, regardless of the level, turns the enable flag on for the
    /// rest of the facility's lifetime. Negative levels are stored as-is and
    /// never satisfy a check at level 1 or above.
    pub fn set_level(&self, category: &str, level: Level) {
        {
            let mut registry = self.write_registry();
            registry.set_level(category, level);
            if category == STATS_CATEGORY {
                self.stats_level.store(level, Ordering::Relaxed);
            }
            self.enabled.store(true, Ordering::Release);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "verbosity", category, level, "debug level set");
    }

    /// Returns the threshold for `category`, or 0 when it was never set.
    pub fn level(&self, category: &str) -> Level {
        self.read_registry().level(category)
    }

    /// Reports whether any category has been configured.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Low overhead predicate: is `category` enabled at `level`?
    ///
    /// Returns false immediately when no category has been configured.
    /// Otherwise compares the category's threshold (0 when unset) against
    /// `level`, so a level 0 request passes for every category once any
    /// category is configured.
    #[inline]
    pub fn check(&self, category: &str, level: Level) -> bool {
        self.is_enabled() && self.read_registry().level(category) >= level
    }

    /// Threshold of the [`STATS_CATEGORY`] category.
    #[inline]
    pub fn stats_level(&self) -> Level {
        self.stats_level.load(Ordering::Relaxed)
    }

    /// Forwards a rendered line to the report sink without checking levels.
    ///
    /// Call sites normally go through [`debug_print!`](crate::debug_print),
    /// which performs the check first and skips argument evaluation when it
    /// fails.
    pub fn report_line(&self, category: &str, line: fmt::Arguments<'_>) {
        self.report.report_line(category, line);
    }

    /// Borrows the report sink.
    pub fn report(&self) -> &dyn ReportSink {
        &*self.report
    }

    /// Returns the configured `(category, level)` pairs ordered by category.
    pub fn snapshot(&self) -> Vec<(String, Level)> {
        self.read_registry()
            .iter()
            .map(|(category, level)| (category.to_owned(), level))
            .collect()
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, CategoryRegistry> {
        self.registry
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, CategoryRegistry> {
        self.registry
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Default for DebugFacility {
    fn default() -> Self {
        Self::new(Arc::new(NullSink))
    }
}

impl fmt::Debug for DebugFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugFacility")
            .field("enabled", &self.is_enabled())
            .field("stats_level", &self.stats_level())
            .field("registry", &*self.read_registry())
            .finish_non_exhaustive()
    }
}
