// LogDeck - ui/theme.rs
//
// Colour scheme, severity style mapping, and layout constants.
// No dependencies on app state or business logic.
//
// Severity styling is a closed, static lookup: one table entry per
// severity giving its text colour, row tint and icon.

use crate::core::model::{Rgb, Row, Severity};
use egui::Color32;

/// Convert a core display colour to egui.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Per-severity display attributes.
pub struct SeverityStyle {
    /// Badge/icon colour.
    pub colour: Color32,

    /// Row background tint, for severities that carry one.
    pub tint: Option<Color32>,

    /// Leading icon glyph.
    pub icon: &'static str,
}

/// Static severity → style mapping. The three error-class severities share
/// the error tint but keep distinct icons.
pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Info => SeverityStyle {
            colour: Color32::from_rgb(209, 213, 219), // Gray 300
            tint: None,
            icon: "\u{25cf}", // ●
        },
        Severity::Warning => SeverityStyle {
            colour: Color32::from_rgb(217, 119, 6), // Amber 600
            tint: Some(Color32::from_rgba_premultiplied(217, 119, 6, 16)),
            icon: "\u{26a0}", // ⚠
        },
        Severity::Error => SeverityStyle {
            colour: Color32::from_rgb(220, 38, 38), // Red 600
            tint: Some(ERROR_TINT),
            icon: "\u{2716}", // ✖
        },
        Severity::Assert => SeverityStyle {
            colour: Color32::from_rgb(220, 38, 38),
            tint: Some(ERROR_TINT),
            icon: "\u{203c}", // ‼
        },
        Severity::Exception => SeverityStyle {
            colour: Color32::from_rgb(248, 113, 113), // Red 400
            tint: Some(ERROR_TINT),
            icon: "\u{2620}", // ☠
        },
    }
}

const ERROR_TINT: Color32 = Color32::from_rgba_premultiplied(220, 38, 38, 22);

/// Tint for success-coloured Info rows.
pub const SUCCESS_TINT: Color32 = Color32::from_rgba_premultiplied(34, 197, 94, 14);

/// The row's background tint, applying the priority order:
/// error class, then warning, then success, else none.
pub fn row_tint(row: &Row) -> Option<Color32> {
    if row.severity.is_error_class() || row.severity == Severity::Warning {
        severity_style(row.severity).tint
    } else if row.is_success {
        Some(SUCCESS_TINT)
    } else {
        None
    }
}

/// Alternating row background shades (zebra striping).
pub fn row_shade(even: bool) -> Color32 {
    if even {
        Color32::from_rgb(24, 27, 32)
    } else {
        Color32::from_rgb(30, 34, 40)
    }
}

/// Overlay drawn on the hovered, unselected row.
pub const HOVER_OVERLAY: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 10);

/// Overlay drawn on selected rows; overrides hover.
pub const SELECTION_OVERLAY: Color32 = Color32::from_rgba_premultiplied(59, 130, 246, 60);

/// Collapse badge colours.
pub const BADGE_BG: Color32 = Color32::from_rgb(55, 65, 81); // Gray 700
pub const BADGE_TEXT: Color32 = Color32::from_rgb(229, 231, 235); // Gray 200

/// Layout constants.
pub const ROW_HEIGHT: f32 = 22.0;
pub const DETAIL_PANE_HEIGHT: f32 = 180.0;
pub const ROW_TEXT_SIZE: f32 = 12.5;
pub const ICON_COLUMN_WIDTH: f32 = 20.0;
