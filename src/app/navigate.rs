// LogDeck - app/navigate.rs
//
// The "open file at line" boundary. Navigation is best-effort: the detail
// pane calls `open_file_ref`, which logs and discards any failure instead
// of surfacing it into the console core.

use crate::util::error::OpenError;
use std::process::Command;

/// Capability for jumping to a source location in an external editor.
pub trait SourceOpener {
    fn open(&self, path: &str, line: u32) -> Result<(), OpenError>;
}

/// Opens files in the editor resolved from the environment:
/// `$VISUAL`, then `$EDITOR`, then `code` from PATH.
pub struct EditorOpener;

impl EditorOpener {
    fn resolve(&self) -> Option<String> {
        std::env::var("VISUAL")
            .ok()
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|cmd| !cmd.is_empty())
            .or_else(|| Some("code".to_string()))
    }
}

impl SourceOpener for EditorOpener {
    fn open(&self, path: &str, line: u32) -> Result<(), OpenError> {
        let editor = self.resolve().ok_or(OpenError::NoEditor)?;

        // VS Code takes a combined --goto argument; everything else gets
        // the vi-style +line convention.
        let mut command = Command::new(&editor);
        if editor.contains("code") {
            command.arg("--goto").arg(format!("{path}:{line}"));
        } else {
            command.arg(format!("+{line}")).arg(path);
        }

        command.spawn().map_err(|source| OpenError::Spawn {
            command: editor,
            source,
        })?;
        Ok(())
    }
}

/// Best-effort navigation: failures are logged at warn and swallowed.
pub fn open_file_ref(opener: &dyn SourceOpener, path: &str, line: u32) {
    match opener.open(path, line) {
        Ok(()) => tracing::debug!(path, line, "Opened source location"),
        Err(e) => tracing::warn!(path, line, error = %e, "Could not open source location"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test double recording open requests, optionally failing.
    struct RecordingOpener {
        calls: RefCell<Vec<(String, u32)>>,
        fail: bool,
    }

    impl SourceOpener for RecordingOpener {
        fn open(&self, path: &str, line: u32) -> Result<(), OpenError> {
            self.calls.borrow_mut().push((path.to_string(), line));
            if self.fail {
                Err(OpenError::NoEditor)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn open_file_ref_forwards_path_and_line() {
        let opener = RecordingOpener {
            calls: RefCell::new(Vec::new()),
            fail: false,
        };
        open_file_ref(&opener, "Assets/Scripts/Foo.cs", 42);
        assert_eq!(
            opener.calls.borrow().as_slice(),
            &[("Assets/Scripts/Foo.cs".to_string(), 42)]
        );
    }

    #[test]
    fn open_failure_is_swallowed() {
        let opener = RecordingOpener {
            calls: RefCell::new(Vec::new()),
            fail: true,
        };
        // Must not panic or propagate; nothing happens beyond the warn log.
        open_file_ref(&opener, "missing.cs", 1);
    }
}
