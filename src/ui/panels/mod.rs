// LogDeck - ui/panels/mod.rs

pub mod console;
pub mod detail;
pub mod toolbar;
