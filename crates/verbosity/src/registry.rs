//! crates/verbosity/src/registry.rs
//! Category name to threshold map backing the debug facility.

use rustc_hash::FxHashMap;

use crate::Level;

/// Associative store mapping category names to verbosity thresholds.
///
/// Keys are compared by exact byte content; there is no hierarchy or
/// wildcard matching. Categories that were never set read as level 0.
#[derive(Clone, Default, Debug)]
pub struct CategoryRegistry {
    levels: FxHashMap<Box<str>, Level>,
}

impl CategoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the threshold for `category`.
    pub fn set_level(&mut self, category: &str, level: Level) {
        if let Some(existing) = self.levels.get_mut(category) {
            *existing = level;
        } else {
            self.levels.insert(Box::from(category), level);
        }
    }

    /// Returns the threshold for `category`, or 0 when it was never set.
    #[inline]
    pub fn level(&self, category: &str) -> Level {
        self.levels.get(category).copied().unwrap_or(0)
    }

    /// Reports whether `category` has an explicit entry.
    pub fn contains(&self, category: &str) -> bool {
        self.levels.contains_key(category)
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Reports whether no category has been configured.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates over `(category, level)` pairs ordered by category name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> + '_ {
        let mut entries: Vec<(&str, Level)> = self
            .levels
            .iter()
            .map(|(category, level)| (category.as_ref(), *level))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
