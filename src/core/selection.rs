// LogDeck - core/selection.rs
//
// Selection bookkeeping for the console list.
//
// Selection is a set of store-indices, not visible-indices, so it survives
// filter changes: a selected row that is filtered out stays logically
// selected until cleared. Range selection operates over the currently
// filtered view, matching the adjacency the user actually sees.

use crate::core::model::Row;
use std::collections::HashSet;

/// Tracks the selected store-indices and the shift-range anchor.
#[derive(Debug, Default)]
pub struct SelectionModel {
    selected: HashSet<usize>,

    /// Visible-index of the last plain click, used as the range anchor.
    anchor: Option<usize>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single store-index.
    pub fn set(&mut self, store_index: usize) {
        self.selected.clear();
        self.selected.insert(store_index);
    }

    /// Add the index if absent, remove it if present. Returns the
    /// resulting membership.
    pub fn toggle(&mut self, store_index: usize) -> bool {
        if self.selected.remove(&store_index) {
            false
        } else {
            self.selected.insert(store_index);
            true
        }
    }

    /// Select every store-index in `visible` between the two visible
    /// positions, inclusive and order-independent. Replaces the current
    /// selection.
    pub fn select_range(&mut self, visible: &[usize], from: usize, to: usize) {
        self.selected.clear();
        let (lo, hi) = (from.min(to), from.max(to));
        for &store_index in visible.iter().take(hi + 1).skip(lo) {
            self.selected.insert(store_index);
        }
    }

    /// Empty the selection and reset the range anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    pub fn contains(&self, store_index: usize) -> bool {
        self.selected.contains(&store_index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn set_anchor(&mut self, visible_index: usize) {
        self.anchor = Some(visible_index);
    }

    /// The most-recently-logged selected row: highest store-index still in
    /// range. Indices stranded by a trim are skipped.
    pub fn primary_selected<'a>(&self, rows: &'a [Row]) -> Option<&'a Row> {
        self.selected
            .iter()
            .filter(|&&idx| idx < rows.len())
            .max()
            .map(|&idx| &rows[idx])
    }

    /// Serialize the selection to copyable text: iterate the visible list
    /// in display order, include selected rows only, and emit each row's
    /// display text followed by its stack trace when non-empty. The result
    /// is deterministic regardless of click order and carries no trailing
    /// separator.
    pub fn build_selected_text(&self, visible: &[usize], rows: &[Row]) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for &store_index in visible {
            if !self.selected.contains(&store_index) {
                continue;
            }
            let Some(row) = rows.get(store_index) else {
                continue;
            };
            parts.push(&row.display_text);
            if !row.stack_trace.is_empty() {
                parts.push(&row.stack_trace);
            }
        }
        parts.join("\n")
    }
}
