//! Rolling Logger
//!
//! A `tracing` subscriber for browser frontends. Formatted lines are kept in a
//! fixed-size circular buffer (oldest evicted first) so the app can show or
//! export recent activity, and on wasm32 every line is mirrored to the
//! browser console.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

// ========================
// Configuration
// ========================

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Maximum number of lines kept in the buffer
    pub capacity: usize,
    /// Most verbose level that is recorded
    pub level: Level,
    /// Mirror lines to the browser console (ignored off wasm32)
    pub console: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: Level::INFO,
            console: true,
        }
    }
}

// ========================
// Circular Buffer
// ========================

/// Shared handle to the in-memory log lines. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    console: bool,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
            console: false,
        }
    }

    fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    fn guard(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: impl Into<String>) {
        let line = line.into();
        if self.console {
            mirror_to_console(&line);
        }
        let mut lines = self.guard();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.guard().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

#[cfg(target_arch = "wasm32")]
fn mirror_to_console(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror_to_console(_line: &str) {}

// ========================
// Writer
// ========================

/// Per-event writer handed out by [`LogBuffer`]. Bytes are collected and split
/// into lines when the event is finished (writer dropped).
pub struct BufferWriter {
    buffer: LogBuffer,
    pending: Vec<u8>,
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for BufferWriter {
    fn drop(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.buffer.push(line);
        }
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.clone(),
            pending: Vec::new(),
        }
    }
}

// ========================
// Timestamps
// ========================

/// Wall-clock timer backed by chrono (works on wasm32 through js Date)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTimer;

impl FormatTime for ChronoTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%H:%M:%S%.3f"))
    }
}

// ========================
// Setup
// ========================

/// Build a subscriber that writes into `buffer` without installing it
pub fn subscriber(config: &LoggerConfig, buffer: LogBuffer) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(buffer)
        .with_timer(ChronoTimer)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(config.level)
        .finish()
}

/// Install the global subscriber and return the buffer handle.
///
/// Calling this more than once returns the buffer created by the first call.
pub fn init(config: LoggerConfig) -> LogBuffer {
    GLOBAL_BUFFER
        .get_or_init(|| {
            let buffer = LogBuffer::new(config.capacity).with_console(config.console);
            // Another subscriber may already be installed (tests, host app)
            let _ = tracing::subscriber::set_global_default(subscriber(&config, buffer.clone()));
            buffer
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_push_evicts_oldest() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = LogBuffer::new(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_writer_splits_lines_on_drop() {
        let buffer = LogBuffer::new(10);
        {
            let mut writer = buffer.make_writer();
            writer.write_all(b"first\nsec").unwrap();
            writer.write_all(b"ond\n\n").unwrap();
            assert!(buffer.is_empty());
        }
        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_clear() {
        let buffer = LogBuffer::new(4);
        buffer.push("x");
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_init_returns_shared_buffer() {
        let first = init(LoggerConfig {
            capacity: 16,
            console: false,
            ..Default::default()
        });
        let second = init(LoggerConfig {
            capacity: 2,
            ..Default::default()
        });

        first.push("shared line");
        assert_eq!(second.capacity(), 16);
        assert!(second.lines().iter().any(|l| l == "shared line"));
    }

    #[test]
    fn test_subscriber_formats_events_into_buffer() {
        let buffer = LogBuffer::new(8);
        let config = LoggerConfig {
            level: Level::INFO,
            ..Default::default()
        };
        let sub = subscriber(&config, buffer.clone());

        tracing::subscriber::with_default(sub, || {
            tracing::info!(count = 6, "generated batch");
            tracing::debug!("filtered out");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("generated batch"));
        assert!(lines[0].contains("count=6"));
    }
}
