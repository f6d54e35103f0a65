// LogDeck - core/filter.rs
//
// Filter engine for the console list: severity toggles, case-insensitive
// substring search and duplicate collapsing, producing the ordered list of
// store-indices to display.
//
// The visible-index cache is invalidate-and-rebuild: any mutation of the
// filter parameters or the store marks it dirty, and the next read rebuilds
// it in one O(n) pass. There is no incremental maintenance; at the buffer
// cap (5000 rows) a full rebuild is cheap relative to a UI frame.

use crate::core::model::{Row, Severity};
use std::collections::HashMap;

/// User-facing filter parameters. All active filters are AND-combined.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Case-insensitive substring search. Empty = no filter.
    pub search_text: String,

    /// Visibility toggle for Info rows.
    pub show_info: bool,

    /// Visibility toggle for Warning rows.
    pub show_warning: bool,

    /// Visibility toggle for error-class rows (Error, Assert, Exception).
    pub show_error: bool,

    /// Group rows sharing a collapse key behind their earliest occurrence.
    pub collapse_enabled: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            show_info: true,
            show_warning: true,
            show_error: true,
            collapse_enabled: false,
        }
    }
}

/// Owns the filter state, the cached visible-index list and the
/// collapse-count map. The cache is exclusively mutated here.
#[derive(Debug, Default)]
pub struct FilterEngine {
    state: FilterState,
    visible: Vec<usize>,
    collapse_counts: HashMap<String, usize>,
    dirty: bool,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Mutable access to the filter parameters; always marks the cache
    /// dirty, so UI bindings can edit fields in place.
    pub fn state_mut(&mut self) -> &mut FilterState {
        self.dirty = true;
        &mut self.state
    }

    /// Invalidate the cache after a store mutation (add, trim, clear).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the visible-index list if anything changed since the last
    /// build. Consumers call this once per read before touching the cache.
    pub fn ensure_built(&mut self, rows: &[Row]) {
        if self.dirty {
            self.rebuild(rows);
            self.dirty = false;
        }
    }

    /// The ordered store-indices passing the current filter. Only valid
    /// after `ensure_built`.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Occurrence count for a collapse key among rows passing the
    /// type/search filters. Absent when collapse is off or the key never
    /// passed the filter.
    pub fn collapse_count(&self, key: &str) -> Option<usize> {
        self.collapse_counts.get(key).copied()
    }

    /// Single pass over all rows in arrival order. Collapse keeps the
    /// earliest occurrence of each key in the visible list and counts the
    /// rest; filtering never reorders.
    fn rebuild(&mut self, rows: &[Row]) {
        self.visible.clear();
        self.collapse_counts.clear();

        let needle = self.state.search_text.to_lowercase();

        for (idx, row) in rows.iter().enumerate() {
            let shown = if row.severity.is_error_class() {
                self.state.show_error
            } else if row.severity == Severity::Warning {
                self.state.show_warning
            } else {
                self.state.show_info
            };
            if !shown {
                continue;
            }

            if !needle.is_empty() && !row.display_text.to_lowercase().contains(&needle) {
                continue;
            }

            if self.state.collapse_enabled {
                match self.collapse_counts.get_mut(&row.collapse_key) {
                    Some(count) => *count += 1,
                    None => {
                        self.collapse_counts.insert(row.collapse_key.clone(), 1);
                        self.visible.push(idx);
                    }
                }
            } else {
                self.visible.push(idx);
            }
        }
    }
}
