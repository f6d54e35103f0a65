// LogDeck - ui/panels/console.rs
//
// The virtualized console list (central area).
//
// Content is sized to `visible_count * ROW_HEIGHT` and only the rows in
// the computed viewport range are painted, so per-frame cost is bounded
// by viewport height regardless of how many rows are buffered.
//
// When auto-scroll is engaged the scroll offset is forced to the pinned
// position *before* the range is computed, so the bottom-pinned view is
// never one frame stale. Selection mutations are collected inside the
// scroll closure and applied after it so we never mutate state while the
// row iteration still borrows it.

use crate::app::console::ConsoleSession;
use crate::core::viewport;
use crate::ui::theme;
use egui::{Align2, FontId, Pos2, Rect, Sense, Vec2};

/// Pending selection mutation from a row click.
struct RowClick {
    visible_index: usize,
    store_index: usize,
    shift: bool,
    command: bool,
}

/// Render the console list.
pub fn render(ui: &mut egui::Ui, session: &mut ConsoleSession) {
    session.filter.ensure_built(session.store.rows());
    let count = session.filter.visible().len();

    if count == 0 {
        ui.centered_and_justified(|ui| {
            if session.store.is_empty() {
                ui.label("No log messages yet.");
            } else {
                ui.label("No messages match the current filters.");
            }
        });
        return;
    }

    let row_height = theme::ROW_HEIGHT;
    let content_h = count as f32 * row_height;
    let viewport_h = ui.available_height();

    let mut scroll_area = egui::ScrollArea::vertical()
        .id_salt("console_list")
        .auto_shrink([false; 2]);
    if session.auto_scroll {
        scroll_area = scroll_area
            .vertical_scroll_offset(viewport::pinned_offset(content_h, viewport_h));
    }

    let mut pending_click: Option<RowClick> = None;

    scroll_area.show_viewport(ui, |ui, view| {
        ui.set_height(content_h);
        let Some(range) =
            viewport::visible_range(view.min.y, view.height(), row_height, count)
        else {
            return;
        };

        let origin = ui.min_rect().min;
        let width = ui.max_rect().width();

        for vi in range {
            let store_index = session.filter.visible()[vi];
            let Some(row) = session.store.rows().get(store_index) else {
                continue;
            };

            let rect = Rect::from_min_size(
                Pos2::new(origin.x, origin.y + vi as f32 * row_height),
                Vec2::new(width, row_height),
            );
            let response = ui.interact(rect, ui.id().with(("console_row", vi)), Sense::click());
            let selected = session.selection.contains(store_index);

            paint_row(ui, session, rect, vi, row, selected, response.hovered());

            if response.clicked() {
                let modifiers = ui.input(|i| i.modifiers);
                pending_click = Some(RowClick {
                    visible_index: vi,
                    store_index,
                    shift: modifiers.shift,
                    command: modifiers.command,
                });
            }
        }
    });

    // An upward user scroll means "stop following"; the toolbar toggle
    // (or a fresh run) re-engages.
    if session.auto_scroll && ui.input(|i| i.raw_scroll_delta.y > 0.0) {
        session.auto_scroll = false;
    }

    if let Some(click) = pending_click {
        apply_click(session, click);
    }
}

/// Paint one row: zebra shade, severity tint, hover/selection overlays,
/// icon, message text, and the collapse badge.
fn paint_row(
    ui: &egui::Ui,
    session: &ConsoleSession,
    rect: Rect,
    visible_index: usize,
    row: &crate::core::model::Row,
    selected: bool,
    hovered: bool,
) {
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, theme::row_shade(visible_index % 2 == 0));
    if let Some(tint) = theme::row_tint(row) {
        painter.rect_filled(rect, 0.0, tint);
    }
    if selected {
        painter.rect_filled(rect, 0.0, theme::SELECTION_OVERLAY);
    } else if hovered {
        painter.rect_filled(rect, 0.0, theme::HOVER_OVERLAY);
    }

    let style = theme::severity_style(row.severity);
    painter.text(
        Pos2::new(rect.min.x + 6.0, rect.center().y),
        Align2::LEFT_CENTER,
        style.icon,
        FontId::proportional(theme::ROW_TEXT_SIZE),
        style.colour,
    );

    // Multi-line messages show their first line here; the detail pane has
    // the full text.
    let first_line = row.display_text.lines().next().unwrap_or("");
    painter.text(
        Pos2::new(rect.min.x + 6.0 + theme::ICON_COLUMN_WIDTH, rect.center().y),
        Align2::LEFT_CENTER,
        first_line,
        FontId::monospace(theme::ROW_TEXT_SIZE),
        theme::to_color32(row.display_color),
    );

    if session.filter.state().collapse_enabled {
        if let Some(n) = session.filter.collapse_count(&row.collapse_key) {
            if n > 1 {
                paint_badge(ui, rect, n);
            }
        }
    }
}

/// Trailing repeat-count badge, right-aligned inside the row.
fn paint_badge(ui: &egui::Ui, row_rect: Rect, count: usize) {
    let painter = ui.painter();
    let label = if count > 999 {
        "999+".to_string()
    } else {
        count.to_string()
    };
    let galley = painter.layout_no_wrap(label, FontId::proportional(11.0), theme::BADGE_TEXT);

    let padding = Vec2::new(6.0, 2.0);
    let size = galley.size() + padding * 2.0;
    let badge_rect = Rect::from_min_size(
        Pos2::new(
            row_rect.max.x - size.x - 8.0,
            row_rect.center().y - size.y / 2.0,
        ),
        size,
    );
    painter.rect_filled(badge_rect, size.y / 2.0, theme::BADGE_BG);
    painter.galley(badge_rect.min + padding, galley, theme::BADGE_TEXT);
}

/// Resolve a click into a selection mutation. Shift extends from the
/// anchor over the filtered view; command/ctrl toggles membership; a plain
/// click selects the single row and moves the anchor.
fn apply_click(session: &mut ConsoleSession, click: RowClick) {
    if click.shift {
        let anchor = session.selection.anchor().unwrap_or(click.visible_index);
        let visible = session.filter.visible().to_vec();
        session
            .selection
            .select_range(&visible, anchor, click.visible_index);
    } else if click.command {
        session.selection.toggle(click.store_index);
        session.selection.set_anchor(click.visible_index);
    } else {
        session.selection.set(click.store_index);
        session.selection.set_anchor(click.visible_index);
    }
}
