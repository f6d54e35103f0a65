// LogDeck - app/console.rs
//
// The console session coordinator. Owns the store, filter engine and
// selection, and is the only place that mutates them together, so the
// coupled lifecycles (trim + selection clear, full reset on session
// boundaries) stay in one spot.
//
// Emission is strictly single-logical-thread: events cross threads only
// through the ingest feed, and `emit` runs on the UI tick. A thread-local
// nesting guard suppresses re-entrant emission, which otherwise recurses
// forever when a subscriber echoes the event back into a log facility
// observed by this console.

use crate::core::filter::FilterEngine;
use crate::core::model::LogEvent;
use crate::core::selection::SelectionModel;
use crate::core::stack;
use crate::core::store::LogStore;
use crate::util::constants;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

thread_local! {
    static EMIT_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Scope guard for the emission nesting depth; the decrement runs on every
/// exit path, including unwinds out of `emit`.
struct EmitScope;

impl EmitScope {
    /// Enter an emission scope, or `None` when already inside one.
    fn try_enter() -> Option<EmitScope> {
        EMIT_DEPTH.with(|depth| {
            if depth.get() > 0 {
                None
            } else {
                depth.set(depth.get() + 1);
                Some(EmitScope)
            }
        })
    }
}

impl Drop for EmitScope {
    fn drop(&mut self) {
        EMIT_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Observer invoked synchronously for every emitted event, in registration
/// order. A panicking observer is isolated and logged; it never blocks the
/// store update or later observers.
pub type LogObserver = Box<dyn Fn(&LogEvent)>;

/// Top-level console state: store + filter + selection + auto-scroll flag
/// + the outbound observer registry.
pub struct ConsoleSession {
    pub store: LogStore,
    pub filter: FilterEngine,
    pub selection: SelectionModel,

    /// When engaged, the console list pins its scroll offset to the bottom
    /// each frame. Disengaged by an upward user scroll; re-engaged by the
    /// toolbar toggle or a fresh run.
    pub auto_scroll: bool,

    observers: Vec<LogObserver>,
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSession {
    pub fn new() -> Self {
        Self {
            store: LogStore::new(),
            filter: FilterEngine::new(),
            selection: SelectionModel::new(),
            auto_scroll: true,
            observers: Vec::new(),
        }
    }

    /// Register an observer for the outbound broadcast. Delivery is
    /// synchronous, in registration order.
    pub fn subscribe(&mut self, observer: LogObserver) {
        self.observers.push(observer);
    }

    /// Ingest one event: resolve the caller class when unknown, broadcast
    /// to observers, append to the store, invalidate the filter cache, and
    /// reconcile a trim with the selection in the same step.
    ///
    /// Re-entrant emission (an observer logging back into the console) is
    /// suppressed.
    pub fn emit(&mut self, mut event: LogEvent) {
        let Some(_scope) = EmitScope::try_enter() else {
            tracing::trace!("Re-entrant log emission suppressed");
            return;
        };

        if event.class_name == constants::UNKNOWN_CLASS {
            if let Some(class) = stack::resolve_class_name(&event.stack_trace) {
                event.class_name = class;
            }
        }

        for (index, observer) in self.observers.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| observer(&event))).is_err() {
                tracing::warn!(subscriber = index, "Log observer panicked; continuing");
            }
        }

        self.store.add(&event);
        self.filter.mark_dirty();

        if self.store.needs_trim() {
            let removed = self.store.trim_if_needed();
            if removed > 0 {
                // Store-indices shifted; any selection would dangle.
                self.selection.clear();
                self.filter.mark_dirty();
                tracing::debug!(removed, "Trimmed oldest rows; selection cleared");
            }
        }
    }

    /// Full reset: rows, counters, selection and filter cache together.
    /// Filter *parameters* (search text, toggles) survive a clear.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.filter.mark_dirty();
    }

    /// A fresh run is starting: clear everything and re-engage
    /// auto-scroll.
    pub fn on_run_start(&mut self) {
        self.clear_all();
        self.auto_scroll = true;
        tracing::info!("Run started; console cleared");
    }

    /// Code/session reload: clear, but leave auto-scroll as the user set it.
    pub fn on_reload(&mut self) {
        self.clear_all();
        tracing::info!("Session reloaded; console cleared");
    }

    /// Run exited: deliberately no clear, so post-run state stays
    /// inspectable.
    pub fn on_run_exit(&mut self) {
        tracing::info!("Run exited; console retained for inspection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Severity;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_feeds_store_and_marks_filter_dirty() {
        let mut session = ConsoleSession::new();
        session.emit(LogEvent::new("hello", Severity::Info));
        assert_eq!(session.store.len(), 1);
        assert!(session.filter.is_dirty());
    }

    #[test]
    fn observers_receive_events_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = ConsoleSession::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            session.subscribe(Box::new(move |event| {
                seen.borrow_mut().push(format!("{tag}:{}", event.text));
            }));
        }
        session.emit(LogEvent::new("x", Severity::Info));
        assert_eq!(
            seen.borrow().as_slice(),
            &["first:x".to_string(), "second:x".to_string()]
        );
    }

    #[test]
    fn panicking_observer_does_not_block_delivery_or_store() {
        let seen = Rc::new(RefCell::new(0u32));
        let mut session = ConsoleSession::new();
        session.subscribe(Box::new(|_| panic!("bad subscriber")));
        {
            let seen = Rc::clone(&seen);
            session.subscribe(Box::new(move |_| *seen.borrow_mut() += 1));
        }
        session.emit(LogEvent::new("x", Severity::Warning));
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(session.store.warning_count, 1);
    }

    #[test]
    fn class_fixup_applies_only_to_unknown_sentinel() {
        let mut session = ConsoleSession::new();

        let mut event = LogEvent::new("a", Severity::Error);
        event.stack_trace = "Game.Enemy.Die () (at Assets/Enemy.cs:88)".to_string();
        session.emit(event);
        assert_eq!(session.store.rows()[0].class_name, "Game.Enemy");

        let mut event = LogEvent::new("b", Severity::Error);
        event.class_name = "KnownClass".to_string();
        event.stack_trace = "Game.Enemy.Die () (at Assets/Enemy.cs:88)".to_string();
        session.emit(event);
        assert_eq!(session.store.rows()[1].class_name, "KnownClass");
    }

    #[test]
    fn unresolvable_class_keeps_sentinel() {
        let mut session = ConsoleSession::new();
        session.emit(LogEvent::new("no trace", Severity::Info));
        assert_eq!(session.store.rows()[0].class_name, "UnknownClass");
    }

    #[test]
    fn nested_emission_is_suppressed() {
        // An observer that echoes the event back through another console
        // on the same thread must not recurse: the nested emit is dropped.
        let echo = Rc::new(RefCell::new(ConsoleSession::new()));
        let mut session = ConsoleSession::new();
        {
            let echo = Rc::clone(&echo);
            session.subscribe(Box::new(move |event| {
                echo.borrow_mut()
                    .emit(LogEvent::new(event.text.clone(), Severity::Info));
            }));
        }
        session.emit(LogEvent::new("ping", Severity::Info));
        assert_eq!(session.store.len(), 1);
        assert!(echo.borrow().store.is_empty());
    }

    #[test]
    fn trim_clears_selection_atomically() {
        let mut session = ConsoleSession::new();
        for i in 0..crate::util::constants::MAX_ROWS {
            session.emit(LogEvent::new(format!("m{i}"), Severity::Info));
        }
        session.selection.set(0);

        session.emit(LogEvent::new("overflow", Severity::Info));
        assert_eq!(session.store.len(), crate::util::constants::MAX_ROWS);
        assert!(session.selection.is_empty());
    }

    #[test]
    fn clear_all_resets_coupled_state() {
        let mut session = ConsoleSession::new();
        session.emit(LogEvent::new("a", Severity::Info));
        session.selection.set(0);
        session.filter.ensure_built(session.store.rows());

        session.clear_all();
        assert!(session.store.is_empty());
        assert!(session.selection.is_empty());
        assert!(session.filter.is_dirty());
        session.filter.ensure_built(session.store.rows());
        assert!(session.filter.visible().is_empty());
    }

    #[test]
    fn run_start_reengages_auto_scroll_but_exit_clears_nothing() {
        let mut session = ConsoleSession::new();
        session.emit(LogEvent::new("a", Severity::Info));
        session.auto_scroll = false;

        session.on_run_start();
        assert!(session.store.is_empty());
        assert!(session.auto_scroll);

        session.emit(LogEvent::new("b", Severity::Info));
        session.on_run_exit();
        assert_eq!(session.store.len(), 1);
    }
}
