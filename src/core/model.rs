// LogDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies; the UI layer converts `Rgb` to its own colour type.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

// =============================================================================
// Severity
// =============================================================================

/// The built-in log severities.
///
/// `Error`, `Assert` and `Exception` form the error class: they share the
/// error toggle, the error counter and the error row tint everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
    Assert,
    Exception,
}

impl Severity {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Assert,
            Severity::Exception,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Assert => "Assert",
            Severity::Exception => "Exception",
        }
    }

    /// Short label for compact display (e.g. detail pane header).
    pub fn short_label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERR",
            Severity::Assert => "ASRT",
            Severity::Exception => "EXC",
        }
    }

    /// True for the severities aggregated into the error bucket.
    pub fn is_error_class(&self) -> bool {
        matches!(
            self,
            Severity::Error | Severity::Assert | Severity::Exception
        )
    }

    /// Parse a severity name, case-insensitively. Unrecognised names
    /// degrade to `Info` rather than failing.
    pub fn parse_lenient(raw: &str) -> Severity {
        match raw.to_ascii_lowercase().as_str() {
            "warning" | "warn" => Severity::Warning,
            "error" | "err" => Severity::Error,
            "assert" => Severity::Assert,
            "exception" => Severity::Exception,
            _ => Severity::Info,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Display colour
// =============================================================================

/// An sRGB display colour. Kept egui-free so the core layer stays pure;
/// `ui::theme` converts to `Color32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse exactly six hex digits ("RRGGBB", case-insensitive).
    /// Anything else returns `None`; callers fall back to white.
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }
}

// =============================================================================
// Log Event (external input)
// =============================================================================

/// A single log event as delivered by an external source. Produced once
/// per log call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Message text.
    pub text: String,

    /// Six-hex-digit display colour ("FFFFFF" when the source gave none).
    pub color_hex: String,

    /// Severity reported by the source.
    pub severity: Severity,

    /// Originating class name, or the `UnknownClass` sentinel.
    pub class_name: String,

    /// Local wall-clock time of the log call.
    pub timestamp: DateTime<Local>,

    /// Frame or sequence number at the time of the log call.
    pub frame: u64,

    /// Raw stack trace text (possibly empty).
    pub stack_trace: String,
}

impl LogEvent {
    /// Convenience constructor applying the defaults for colour and class.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            color_hex: constants::DEFAULT_COLOR_HEX.to_string(),
            severity,
            class_name: constants::UNKNOWN_CLASS.to_string(),
            timestamp: Local::now(),
            frame: 0,
            stack_trace: String::new(),
        }
    }
}

// =============================================================================
// Row (display-ready derivation of one event)
// =============================================================================

/// Immutable, display-ready view of a `LogEvent`. Owned exclusively by the
/// log store once constructed.
#[derive(Debug, Clone)]
pub struct Row {
    /// Text shown in the list.
    pub display_text: String,

    /// Severity (drives toggle bucket, counter, tint and icon).
    pub severity: Severity,

    /// Parsed display colour; white when the event's hex was malformed.
    pub display_color: Rgb,

    /// Originating class name (detail pane metadata).
    pub class_name: String,

    /// Local time of the log call.
    pub timestamp: DateTime<Local>,

    /// Frame or sequence number.
    pub frame: u64,

    /// Raw stack trace text.
    pub stack_trace: String,

    /// True iff severity is Info and the event carried the success colour.
    pub is_success: bool,

    /// Message text with volatile timestamp/frame fields stripped;
    /// groups textually-identical messages when collapse is enabled.
    pub collapse_key: String,
}

impl Row {
    /// Derive a row from an event. Total: malformed colours degrade to
    /// white rather than failing.
    pub fn from_event(event: &LogEvent) -> Row {
        let display_color = Rgb::parse_hex(&event.color_hex).unwrap_or(Rgb::WHITE);
        let is_success = event.severity == Severity::Info
            && event
                .color_hex
                .eq_ignore_ascii_case(constants::SUCCESS_COLOR_HEX);
        Row {
            display_text: event.text.clone(),
            severity: event.severity,
            display_color,
            class_name: event.class_name.clone(),
            timestamp: event.timestamp,
            frame: event.frame,
            stack_trace: event.stack_trace.clone(),
            is_success,
            collapse_key: collapse_key(&event.text),
        }
    }
}

/// Pattern for the volatile `[t: HH:MM:SS] [f: <digits>]` stamp that some
/// sources embed in message text.
fn volatile_fields_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[t: \d{2}:\d{2}:\d{2}\] \[f: \d+\]").expect("valid collapse-key pattern")
    })
}

/// Derive the collapse key for a message: strip every occurrence of the
/// volatile timestamp/frame pattern and trim surrounding whitespace.
///
/// Pure function of the text, so identical messages logged at different
/// times (or frames) collapse to the same group.
pub fn collapse_key(text: &str) -> String {
    volatile_fields_re().replace_all(text, "").trim().to_string()
}

// =============================================================================
// Raw event (JSONL wire shape)
// =============================================================================

/// Wire shape of a log event on the JSONL stdin feed. Every field is
/// optional; missing or unrecognised values take defaults, so the
/// conversion to `LogEvent` is total.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub text: String,

    /// Six-hex-digit colour; malformed values are kept as-is and degrade
    /// to white at row construction.
    #[serde(default)]
    pub color: Option<String>,

    /// Severity name, matched case-insensitively.
    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub frame: Option<u64>,

    #[serde(default)]
    pub stack: Option<String>,
}

impl RawEvent {
    /// Convert to a `LogEvent`, stamping the current local time.
    pub fn into_event(self) -> LogEvent {
        LogEvent {
            text: self.text,
            color_hex: self
                .color
                .unwrap_or_else(|| constants::DEFAULT_COLOR_HEX.to_string()),
            severity: self
                .severity
                .as_deref()
                .map(Severity::parse_lenient)
                .unwrap_or(Severity::Info),
            class_name: self
                .class
                .unwrap_or_else(|| constants::UNKNOWN_CLASS.to_string()),
            timestamp: Local::now(),
            frame: self.frame.unwrap_or(0),
            stack_trace: self.stack.unwrap_or_default(),
        }
    }
}
