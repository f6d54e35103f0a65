// LogDeck - app/mod.rs
//
// Application layer: session orchestration, ingestion boundary, editor
// navigation boundary.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod console;
pub mod ingest;
pub mod navigate;
