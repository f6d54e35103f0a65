// LogDeck - core/mod.rs
//
// Core business logic layer: model, buffering, filtering, selection,
// stack-trace parsing and viewport math.
// Must NOT depend on: ui, app, or any I/O crate directly.

pub mod filter;
pub mod model;
pub mod selection;
pub mod stack;
pub mod store;
pub mod viewport;
