// LogDeck - core/stack.rs
//
// Stack-trace text parsing. Extracts (file, line) references from the two
// conventions found in the wild:
//
//   Foo.Bar () (at Assets/Scripts/Foo.cs:42)
//   at Foo.Bar() in C:\Proj\Foo.cs:line 17
//
// Lines matching neither convention are plain display-only text. Parsing
// never fails; everything degrades to non-navigable lines.
//
// Also hosts the best-effort class-name heuristic used when an event
// arrives with the `UnknownClass` sentinel. It is plain text inspection,
// not symbolication, and callers must tolerate it returning nothing.

use crate::core::model::Row;
use regex::Regex;
use std::sync::OnceLock;

/// One line of a parsed stack trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLine {
    /// The original line text, as displayed.
    pub text: String,

    /// Source file path, when the line matched a known convention.
    pub file: Option<String>,

    /// Source line number, when the line matched a known convention.
    pub line: Option<u32>,
}

impl StackLine {
    fn plain(text: &str) -> StackLine {
        StackLine {
            text: text.to_string(),
            file: None,
            line: None,
        }
    }

    /// Navigable reference, present only when the path is non-empty and
    /// the line number is positive.
    pub fn file_ref(&self) -> Option<(&str, u32)> {
        match (self.file.as_deref(), self.line) {
            (Some(file), Some(line)) if !file.is_empty() && line > 0 => Some((file, line)),
            _ => None,
        }
    }
}

/// Bracketed convention: `(at <path>:<line>)`.
fn at_form_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(at (.+):(\d+)\)").expect("valid at-form pattern"))
}

/// Runtime convention: `in <path>:line <n>`.
fn in_form_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" in (.+):line (\d+)").expect("valid in-form pattern"))
}

/// Parse one line against the two conventions, bracketed form first.
fn parse_line(line: &str) -> StackLine {
    for re in [at_form_re(), in_form_re()] {
        if let Some(caps) = re.captures(line) {
            let file = caps[1].to_string();
            // Line numbers beyond u32 are treated as non-navigable text.
            let Ok(number) = caps[2].parse::<u32>() else {
                continue;
            };
            return StackLine {
                text: line.to_string(),
                file: Some(file),
                line: Some(number),
            };
        }
    }
    StackLine::plain(line)
}

/// Split a multi-line stack trace into per-line records. Empty input
/// yields an empty list.
pub fn parse_stack_trace(raw: &str) -> Vec<StackLine> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.lines().map(parse_line).collect()
}

/// Stack lines for a row's trace; convenience for the detail pane.
pub fn row_stack_lines(row: &Row) -> Vec<StackLine> {
    parse_stack_trace(&row.stack_trace)
}

/// Best-effort class-name resolution from the first line of a stack trace.
///
/// Strips a leading `at ` marker, truncates at the first ` in ` (return
/// type / file path separator) or `(` (argument list), then takes the
/// substring before the last `.`. No dot left means resolution failed.
pub fn resolve_class_name(stack_trace: &str) -> Option<String> {
    let first = stack_trace.lines().next()?.trim_start();
    let first = first.strip_prefix("at ").unwrap_or(first);

    let cut = match (first.find(" in "), first.find('(')) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => first.len(),
    };
    let head = &first[..cut];

    let class = head[..head.rfind('.')?].trim();
    if class.is_empty() {
        None
    } else {
        Some(class.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bracketed_at_form() {
        let lines = parse_stack_trace("Foo.Bar () (at Assets/Scripts/Foo.cs:42)");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].file_ref(), Some(("Assets/Scripts/Foo.cs", 42)));
    }

    #[test]
    fn parses_in_line_form() {
        let lines = parse_stack_trace(r"   at Foo.Bar() in C:\Proj\Foo.cs:line 17");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].file_ref(), Some((r"C:\Proj\Foo.cs", 17)));
    }

    #[test]
    fn plain_line_has_no_file_ref() {
        let lines = parse_stack_trace("Foo.Bar()");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].file_ref(), None);
        assert_eq!(lines[0].text, "Foo.Bar()");
    }

    #[test]
    fn at_form_wins_over_in_form() {
        // A pathological line matching both conventions takes the
        // bracketed form.
        let line = "Foo.Bar() in X.cs:line 9 (at Assets/Foo.cs:3)";
        let parsed = parse_line(line);
        assert_eq!(parsed.file_ref(), Some(("Assets/Foo.cs", 3)));
    }

    #[test]
    fn multi_line_trace_mixes_navigable_and_plain() {
        let raw = "UnityEngine.Debug:LogError(Object)\n\
                   Enemy.Die () (at Assets/Scripts/Enemy.cs:88)\n\
                   Enemy.Update () (at Assets/Scripts/Enemy.cs:40)";
        let lines = parse_stack_trace(raw);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].file_ref(), None);
        assert_eq!(lines[1].file_ref(), Some(("Assets/Scripts/Enemy.cs", 88)));
        assert_eq!(lines[2].file_ref(), Some(("Assets/Scripts/Enemy.cs", 40)));
    }

    #[test]
    fn zero_line_is_not_navigable() {
        let parsed = parse_line("X () (at Assets/X.cs:0)");
        assert_eq!(parsed.file_ref(), None);
    }

    #[test]
    fn empty_trace_yields_empty_list() {
        assert!(parse_stack_trace("").is_empty());
    }

    #[test]
    fn class_name_from_method_signature() {
        assert_eq!(
            resolve_class_name("Game.Enemy.Die () (at Assets/Enemy.cs:88)"),
            Some("Game.Enemy".to_string())
        );
    }

    #[test]
    fn class_name_strips_at_marker_and_in_suffix() {
        assert_eq!(
            resolve_class_name(r"at Foo.Bar in C:\Proj\Foo.cs:line 17"),
            Some("Foo".to_string())
        );
    }

    #[test]
    fn class_name_uses_first_line_only() {
        let trace = "Logger.Write ()\nGame.Enemy.Die () (at Assets/Enemy.cs:88)";
        assert_eq!(resolve_class_name(trace), Some("Logger".to_string()));
    }

    #[test]
    fn class_name_fails_without_dot() {
        assert_eq!(resolve_class_name("Main ()"), None);
        assert_eq!(resolve_class_name(""), None);
    }
}
