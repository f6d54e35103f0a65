// LogDeck - ui/panels/detail.rs
//
// Detail pane (resizable bottom panel) for the primary selected row:
// metadata grid, full message text, and the parsed stack trace with
// clickable file references.

use crate::app::console::ConsoleSession;
use crate::app::navigate::{self, SourceOpener};
use crate::core::stack;
use crate::ui::theme;

/// Render the detail pane.
pub fn render(ui: &mut egui::Ui, session: &ConsoleSession, opener: &dyn SourceOpener) {
    let Some(row) = session.selection.primary_selected(session.store.rows()) else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a message to view details.");
        });
        return;
    };

    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            let style = theme::severity_style(row.severity);
            ui.label("Severity:");
            ui.colored_label(style.colour, row.severity.label());
            ui.end_row();

            ui.label("Class:");
            ui.label(&row.class_name);
            ui.end_row();

            ui.label("Time:");
            ui.label(row.timestamp.format("%H:%M:%S%.3f").to_string());
            ui.end_row();

            ui.label("Frame:");
            ui.label(row.frame.to_string());
            ui.end_row();
        });

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("detail_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&row.display_text)
                    .monospace()
                    .color(theme::to_color32(row.display_color)),
            );

            let lines = stack::row_stack_lines(row);
            if !lines.is_empty() {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Stack trace").strong().small());
                for line in &lines {
                    match line.file_ref() {
                        Some((path, number)) => {
                            let response =
                                ui.link(egui::RichText::new(&line.text).monospace().small());
                            if response.clicked() {
                                // Best-effort: failures are logged and
                                // swallowed at the boundary.
                                navigate::open_file_ref(opener, path, number);
                            }
                        }
                        None => {
                            ui.label(
                                egui::RichText::new(&line.text).monospace().small().weak(),
                            );
                        }
                    }
                }
            }
        });
}
