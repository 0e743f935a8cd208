//! Plain text rendering of log entries
//!
//! Produces the fixed single-line layout used by the terminal backend:
//!
//! ```text
//! [0003.141592][Service.FS] Info fs/archive.rs:fs::archive:88: mounted archive
//! [0003.200000][Repeated 2x][Service.FS] Info fs/archive.rs:fs::archive:88: mounted archive
//! ```

use super::log_entry::Entry;
use std::fmt::Write;

/// Upper bound on a rendered line, in bytes
pub const DEFAULT_MAX_LINE_LEN: usize = 4 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainFormatter {
    max_len: usize,
}

impl PlainFormatter {
    pub fn new() -> Self {
        Self {
            max_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Formatter that truncates lines longer than `max_len` bytes.
    ///
    /// A limit of zero is raised to one byte.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Render `entry` into `out`, replacing its contents.
    ///
    /// Returns the number of characters written. Output past the line limit
    /// is cut at the nearest character boundary.
    pub fn format_into(&self, entry: &Entry, out: &mut String) -> usize {
        out.clear();

        let timestamp = entry.timestamp();
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "[{:04}.{:06}]",
            timestamp.as_secs(),
            timestamp.subsec_micros()
        );
        if entry.is_repeat() {
            let _ = write!(out, "[Repeated {}x]", entry.repeat_count());
        }
        let _ = write!(
            out,
            "[{}] {} {}: {}",
            entry.class().name(),
            entry.level().to_str(),
            entry.location(),
            entry.message()
        );

        if out.len() > self.max_len {
            let mut cut = self.max_len;
            while !out.is_char_boundary(cut) {
                cut -= 1;
            }
            out.truncate(cut);
        }
        out.chars().count()
    }

    pub fn format(&self, entry: &Entry) -> String {
        let mut line = String::with_capacity(128);
        self.format_into(entry, &mut line);
        line
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}
