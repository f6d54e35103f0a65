// LogDeck - util/error.rs
//
// Typed errors with context-preserving chains.
//
// The console core is total by design: malformed colours, empty text and
// unparseable stack lines all degrade to defined defaults instead of
// raising. The only fallible surface left is the navigation boundary,
// where opening a source file in an external editor can fail; callers
// treat that as best-effort and log-and-discard.

use std::fmt;
use std::io;

/// Errors from the "open file at line" boundary.
#[derive(Debug)]
pub enum OpenError {
    /// No editor could be resolved from $VISUAL, $EDITOR or PATH defaults.
    NoEditor,

    /// The editor process could not be spawned.
    Spawn {
        command: String,
        source: io::Error,
    },
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEditor => {
                write!(f, "No editor configured (set $VISUAL or $EDITOR)")
            }
            Self::Spawn { command, source } => {
                write!(f, "Failed to launch editor '{command}': {source}")
            }
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoEditor => None,
            Self::Spawn { source, .. } => Some(source),
        }
    }
}
