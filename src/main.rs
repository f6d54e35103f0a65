// LogDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Ingest feed setup (stdin reader thread)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so the binary-side gui.rs can
// use `crate::app::...`, `crate::core::...` etc.
pub use logdeck::app;
pub use logdeck::core;
pub use logdeck::ui;
pub use logdeck::util;

use crate::app::console::ConsoleSession;
use crate::app::ingest::{self, IngestQueue, StdinFormat};
use clap::Parser;

/// LogDeck - interactive log console.
///
/// Pipe program output into LogDeck to browse it in a filterable,
/// collapsible console with clickable stack traces.
#[derive(Parser, Debug)]
#[command(name = "LogDeck", version, about)]
struct Cli {
    /// Treat stdin as JSON-lines events instead of plain text.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        json = cli.json,
        "LogDeck starting"
    );

    let mut session = ConsoleSession::new();
    // Trace-level mirror of the outbound broadcast; also keeps the
    // observer path exercised in a standalone build.
    session.subscribe(Box::new(|event| {
        tracing::trace!(severity = %event.severity, text = %event.text, "Event broadcast");
    }));

    let queue = IngestQueue::new();
    let format = if cli.json {
        StdinFormat::Jsonl
    } else {
        StdinFormat::Plain
    };
    ingest::spawn_stdin_feed(queue.feed(), format);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogDeckApp::new(session, queue)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogDeck GUI: {e}");
        std::process::exit(1);
    }
}
