// LogDeck - ui/panels/toolbar.rs
//
// Console toolbar: clear, search, collapse and auto-scroll toggles, copy
// selection, and the three severity toggle buttons carrying the running
// counters (cumulative since the last clear, not buffer occupancy).

use crate::app::console::ConsoleSession;
use crate::core::model::Severity;
use crate::ui::theme;

/// Render the toolbar row.
pub fn render(ui: &mut egui::Ui, session: &mut ConsoleSession) {
    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            session.clear_all();
        }

        ui.separator();

        // Search. Edited through a local copy so the filter cache is only
        // invalidated when the text actually changes.
        let mut search = session.filter.state().search_text.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search")
                .desired_width(200.0),
        );
        if response.changed() {
            session.filter.state_mut().search_text = search;
        }

        let mut collapse = session.filter.state().collapse_enabled;
        if ui
            .toggle_value(&mut collapse, "Collapse")
            .on_hover_text("Group identical messages behind their first occurrence")
            .changed()
        {
            session.filter.state_mut().collapse_enabled = collapse;
        }

        ui.toggle_value(&mut session.auto_scroll, "Auto-scroll")
            .on_hover_text("Keep the newest rows in view");

        ui.add_enabled_ui(!session.selection.is_empty(), |ui| {
            let label = format!("Copy ({})", session.selection.len());
            if ui.button(label).clicked() {
                session.filter.ensure_built(session.store.rows());
                let text = session
                    .selection
                    .build_selected_text(session.filter.visible(), session.store.rows());
                ui.ctx().copy_text(text);
            }
        });

        // Severity toggles, right-aligned, each showing its running count.
        let info_count = session.store.info_count;
        let warning_count = session.store.warning_count;
        let error_count = session.store.error_count;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            severity_toggle(ui, session, Severity::Error, error_count);
            severity_toggle(ui, session, Severity::Warning, warning_count);
            severity_toggle(ui, session, Severity::Info, info_count);
        });
    });
}

/// One severity toggle button: icon + count, coloured per severity.
/// `severity` stands in for its whole toggle bucket (the error button
/// covers Error, Assert and Exception).
fn severity_toggle(ui: &mut egui::Ui, session: &mut ConsoleSession, severity: Severity, count: usize) {
    let style = theme::severity_style(severity);
    let mut shown = match severity {
        Severity::Warning => session.filter.state().show_warning,
        s if s.is_error_class() => session.filter.state().show_error,
        _ => session.filter.state().show_info,
    };

    let text = egui::RichText::new(format!("{} {}", style.icon, format_count(count)))
        .color(style.colour);
    let response = ui
        .toggle_value(&mut shown, text)
        .on_hover_text(format!("Show {} messages", severity.label()));

    if response.changed() {
        let state = session.filter.state_mut();
        match severity {
            Severity::Warning => state.show_warning = shown,
            s if s.is_error_class() => state.show_error = shown,
            _ => state.show_info = shown,
        }
    }
}

/// Counts above 999 display as "999+" to keep the toolbar width stable.
fn format_count(count: usize) -> String {
    if count > 999 {
        "999+".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_caps_at_three_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "999+");
        assert_eq!(format_count(50_000), "999+");
    }
}
