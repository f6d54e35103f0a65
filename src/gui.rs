// LogDeck - gui.rs
//
// Top-level eframe::App implementation. Wires the ingest queue, the
// console session and the UI panels together: events are drained from the
// feed once per frame and emitted into the session before any panel reads
// derived state.

use crate::app::console::ConsoleSession;
use crate::app::ingest::IngestQueue;
use crate::app::navigate::EditorOpener;
use crate::ui;

/// The LogDeck application.
pub struct LogDeckApp {
    pub session: ConsoleSession,
    pub queue: IngestQueue,
    opener: EditorOpener,
}

impl LogDeckApp {
    pub fn new(session: ConsoleSession, queue: IngestQueue) -> Self {
        Self {
            session,
            queue,
            opener: EditorOpener,
        }
    }
}

impl eframe::App for LogDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain this frame's budget of queued events into the session.
        let events = self.queue.drain();
        let had_events = !events.is_empty();
        for event in events {
            self.session.emit(event);
        }
        if had_events {
            // More events may be queued beyond the per-frame budget.
            ctx.request_repaint();
        } else {
            // Idle poll so piped input appears without user interaction.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Console", |ui| {
                    if ui.button("Clear").clicked() {
                        self.session.clear_all();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                // Session-boundary triggers. In an embedded build these
                // arrive from the host; standalone they are manual.
                ui.menu_button("Session", |ui| {
                    if ui.button("Start Run").clicked() {
                        self.session.on_run_start();
                        ui.close_menu();
                    }
                    if ui.button("Reload").clicked() {
                        self.session.on_reload();
                        ui.close_menu();
                    }
                    if ui.button("Exit Run").clicked() {
                        self.session.on_run_exit();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::panels::toolbar::render(ui, &mut self.session);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let total = self.session.store.info_count
                    + self.session.store.warning_count
                    + self.session.store.error_count;
                ui.label(format!(
                    "{} buffered \u{00b7} {} logged",
                    self.session.store.len(),
                    total
                ));
                if !self.session.selection.is_empty() {
                    ui.separator();
                    ui.label(format!("{} selected", self.session.selection.len()));
                }
            });
        });

        // Detail pane (bottom, resizable)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.session, &self.opener);
            });

        // Central panel: the virtualized console list.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::console::render(ui, &mut self.session);
        });
    }
}
