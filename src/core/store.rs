// LogDeck - core/store.rs
//
// Bounded, append-only row buffer with running per-severity counters.
// Core layer: pure logic, no I/O or UI dependencies.
//
// The counters are cumulative since the last clear: trimming drops row
// storage but never decrements a counter, so the toolbar counts remain a
// running total for the session rather than a buffer-occupancy figure.

use crate::core::model::{LogEvent, Row, Severity};
use crate::util::constants::MAX_ROWS;

/// Owns the ordered row sequence (arrival order) and the three severity
/// counters. All operations are total; nothing here can fail.
#[derive(Debug, Default)]
pub struct LogStore {
    rows: Vec<Row>,

    /// Info events since the last clear (includes success-coloured rows).
    pub info_count: usize,

    /// Warning events since the last clear.
    pub warning_count: usize,

    /// Error-class events (Error, Assert, Exception) since the last clear.
    pub error_count: usize,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a row from the event, append it and bump the matching
    /// counter. Does not touch the filter cache; the caller marks it dirty.
    pub fn add(&mut self, event: &LogEvent) {
        let row = Row::from_event(event);
        match row.severity {
            Severity::Warning => self.warning_count += 1,
            s if s.is_error_class() => self.error_count += 1,
            _ => self.info_count += 1,
        }
        self.rows.push(row);
    }

    /// All rows in arrival order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True iff the row count exceeds the buffer cap.
    pub fn needs_trim(&self) -> bool {
        self.rows.len() > MAX_ROWS
    }

    /// Drop the oldest excess rows in one bulk operation. Counters are
    /// left untouched. Returns the number of rows removed so the owner can
    /// reconcile any selection that referenced them.
    pub fn trim_if_needed(&mut self) -> usize {
        if self.rows.len() <= MAX_ROWS {
            return 0;
        }
        let excess = self.rows.len() - MAX_ROWS;
        self.rows.drain(..excess);
        excess
    }

    /// Empty the buffer and reset all counters to zero.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.info_count = 0;
        self.warning_count = 0;
        self.error_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_n(store: &mut LogStore, n: usize, severity: Severity) {
        for i in 0..n {
            store.add(&LogEvent::new(format!("msg {i}"), severity));
        }
    }

    #[test]
    fn counters_match_additions() {
        let mut store = LogStore::new();
        add_n(&mut store, 3, Severity::Info);
        add_n(&mut store, 2, Severity::Warning);
        add_n(&mut store, 1, Severity::Error);
        add_n(&mut store, 1, Severity::Assert);
        add_n(&mut store, 1, Severity::Exception);

        assert_eq!(store.info_count, 3);
        assert_eq!(store.warning_count, 2);
        // Error, Assert and Exception aggregate into the error counter.
        assert_eq!(store.error_count, 3);
        assert_eq!(
            store.info_count + store.warning_count + store.error_count,
            store.len()
        );
    }

    #[test]
    fn trim_removes_oldest_and_keeps_order() {
        let mut store = LogStore::new();
        add_n(&mut store, MAX_ROWS + 7, Severity::Info);

        assert!(store.needs_trim());
        let removed = store.trim_if_needed();
        assert_eq!(removed, 7);
        assert_eq!(store.len(), MAX_ROWS);
        // Oldest rows are gone; relative order of survivors is unchanged.
        assert_eq!(store.rows()[0].display_text, "msg 7");
        assert_eq!(
            store.rows()[MAX_ROWS - 1].display_text,
            format!("msg {}", MAX_ROWS + 6)
        );
        // Counters are cumulative across trims.
        assert_eq!(store.info_count, MAX_ROWS + 7);
    }

    #[test]
    fn trim_is_noop_at_or_below_cap() {
        let mut store = LogStore::new();
        add_n(&mut store, 10, Severity::Info);
        assert!(!store.needs_trim());
        assert_eq!(store.trim_if_needed(), 0);
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn clear_resets_rows_and_counters() {
        let mut store = LogStore::new();
        add_n(&mut store, 5, Severity::Warning);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.info_count, 0);
        assert_eq!(store.warning_count, 0);
        assert_eq!(store.error_count, 0);
    }
}
