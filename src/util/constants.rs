// LogDeck - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogDeck";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Buffer limits
// =============================================================================

/// Maximum number of rows held in the store. When exceeded, the oldest
/// excess rows are dropped in one bulk trim. Counters are not decremented
/// by trims (cumulative-since-clear totals).
pub const MAX_ROWS: usize = 5_000;

/// Maximum number of ingested events drained from the feed channel per UI
/// frame. Remaining events stay queued for subsequent frames so a burst
/// cannot stall the render loop.
pub const MAX_EVENTS_PER_FRAME: usize = 500;

// =============================================================================
// Event defaults
// =============================================================================

/// Display colour assumed when an event carries no colour.
pub const DEFAULT_COLOR_HEX: &str = "FFFFFF";

/// Colour that marks an Info event as a success message (compared
/// case-insensitively against the event's raw hex).
pub const SUCCESS_COLOR_HEX: &str = "00FF00";

/// Sentinel class name for events whose caller could not be identified.
/// The session attempts a best-effort fixup from the stack trace.
pub const UNKNOWN_CLASS: &str = "UnknownClass";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
