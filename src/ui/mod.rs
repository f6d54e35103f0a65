// LogDeck - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (session), core (read-only models), egui.
// Must NOT depend on: direct I/O.

pub mod panels;
pub mod theme;
