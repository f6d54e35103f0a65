// LogDeck - app/ingest.rs
//
// The ingestion boundary. External sources may log from any thread; the
// feed is a cloneable channel sender, and all reads happen on the UI tick
// via a bounded per-frame drain so a burst of events cannot stall a frame.
//
// The bundled stdin reader turns piped program output into events: one
// Info event per plain line, or one structured event per JSONL record
// when --json is given. Malformed JSON degrades to a plain-text line.

use crate::core::model::{LogEvent, RawEvent, Severity};
use crate::util::constants::MAX_EVENTS_PER_FRAME;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Cloneable handle for pushing events into the console from any thread.
#[derive(Clone)]
pub struct LogFeed {
    tx: Sender<LogEvent>,
}

impl LogFeed {
    /// Enqueue an event. Safe from an arbitrary calling context; the event
    /// is read on the next UI tick. Events pushed after the UI side has
    /// shut down are dropped silently.
    pub fn push(&self, event: LogEvent) {
        let _ = self.tx.send(event);
    }
}

/// UI-side receiver: owns the channel and drains it once per frame.
pub struct IngestQueue {
    tx: Sender<LogEvent>,
    rx: Receiver<LogEvent>,
}

impl Default for IngestQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// A new feed handle for an external source.
    pub fn feed(&self) -> LogFeed {
        LogFeed {
            tx: self.tx.clone(),
        }
    }

    /// Drain up to the per-frame budget of queued events. Anything beyond
    /// the budget stays queued for the next frame.
    pub fn drain(&self) -> Vec<LogEvent> {
        self.rx.try_iter().take(MAX_EVENTS_PER_FRAME).collect()
    }
}

/// Stdin line format accepted by the reader thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinFormat {
    /// Each line becomes an Info event with the line as its text.
    Plain,
    /// Each line is a JSON `RawEvent`; malformed lines fall back to Plain.
    Jsonl,
}

/// Parse one stdin line into an event according to the format.
pub fn parse_stdin_line(line: &str, format: StdinFormat) -> LogEvent {
    match format {
        StdinFormat::Plain => LogEvent::new(line, Severity::Info),
        StdinFormat::Jsonl => match serde_json::from_str::<RawEvent>(line) {
            Ok(raw) => raw.into_event(),
            Err(e) => {
                tracing::debug!(error = %e, "Malformed JSONL line; ingesting as plain text");
                LogEvent::new(line, Severity::Info)
            }
        },
    }
}

/// Spawn the stdin reader thread. Exits quietly when stdin closes; read
/// errors end the feed rather than surfacing into the console.
pub fn spawn_stdin_feed(feed: LogFeed, format: StdinFormat) {
    thread::Builder::new()
        .name("stdin-feed".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            let mut sequence: u64 = 0;
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!(error = %e, "Stdin read failed; stopping feed");
                        break;
                    }
                };
                if line.is_empty() {
                    continue;
                }
                let mut event = parse_stdin_line(&line, format);
                // Plain lines have no native sequence number; stamp one so
                // arrival order is visible in the detail pane.
                if event.frame == 0 {
                    event.frame = sequence;
                }
                sequence += 1;
                feed.push(event);
            }
            tracing::debug!(lines = sequence, "Stdin feed ended");
        })
        .expect("spawn stdin feed thread");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_crosses_threads_and_drains_in_order() {
        let queue = IngestQueue::new();
        let feed = queue.feed();
        let handle = thread::spawn(move || {
            for i in 0..10 {
                feed.push(LogEvent::new(format!("m{i}"), Severity::Info));
            }
        });
        handle.join().unwrap();

        let drained = queue.drain();
        assert_eq!(drained.len(), 10);
        assert_eq!(drained[0].text, "m0");
        assert_eq!(drained[9].text, "m9");
    }

    #[test]
    fn drain_respects_per_frame_budget() {
        let queue = IngestQueue::new();
        let feed = queue.feed();
        for i in 0..(MAX_EVENTS_PER_FRAME + 50) {
            feed.push(LogEvent::new(format!("m{i}"), Severity::Info));
        }
        assert_eq!(queue.drain().len(), MAX_EVENTS_PER_FRAME);
        assert_eq!(queue.drain().len(), 50);
    }

    #[test]
    fn jsonl_line_parses_structured_event() {
        let event = parse_stdin_line(
            r#"{"text":"boom","severity":"error","class":"Game.Enemy","frame":12}"#,
            StdinFormat::Jsonl,
        );
        assert_eq!(event.text, "boom");
        assert_eq!(event.severity, Severity::Error);
        assert_eq!(event.class_name, "Game.Enemy");
        assert_eq!(event.frame, 12);
    }

    #[test]
    fn malformed_jsonl_degrades_to_plain_text() {
        let event = parse_stdin_line("not json at all", StdinFormat::Jsonl);
        assert_eq!(event.text, "not json at all");
        assert_eq!(event.severity, Severity::Info);
    }
}
