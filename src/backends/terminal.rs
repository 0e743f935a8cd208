//! Terminal backend with repeat collapsing
//!
//! Consecutive identical entries are drawn as one line whose repeat counter
//! keeps increasing: the previous line is erased with cursor control and the
//! entry is redrawn with a `Repeated Nx` marker. When the width of the
//! terminal is unknown (output redirected, query failed) nothing is erased and
//! every repeat is appended as its own stamped line.

use super::control::{probe, ColorMode, TerminalControl};
use crate::core::{BackendMetrics, Entry, PlainFormatter};
use std::io::{self, Write};
use std::sync::Arc;

/// What is currently on screen.
#[derive(Debug)]
struct RenderState {
    /// Last rendered entry, stored with a zero repeat count
    last_entry: Entry,
    /// Characters in the last rendered line, without the terminator
    rendered_width: usize,
    /// Terminal width when the last line was written
    columns: Option<u16>,
}

pub struct TerminalBackend {
    writer: Box<dyn Write + Send>,
    terminal: Box<dyn TerminalControl>,
    formatter: PlainFormatter,
    state: Option<RenderState>,
    repeat_counter: u64,
    line: String,
    metrics: Arc<BackendMetrics>,
}

impl TerminalBackend {
    pub fn new(writer: Box<dyn Write + Send>, terminal: Box<dyn TerminalControl>) -> Self {
        Self {
            writer,
            terminal,
            formatter: PlainFormatter::new(),
            state: None,
            repeat_counter: 0,
            line: String::with_capacity(256),
            metrics: Arc::new(BackendMetrics::new()),
        }
    }

    /// Backend on the process's stderr, with terminal control picked by `mode`
    pub fn stderr(mode: ColorMode) -> Self {
        Self::new(Box::new(io::stderr()), probe(mode))
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: PlainFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<BackendMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<BackendMetrics> {
        &self.metrics
    }

    pub fn terminal_name(&self) -> &str {
        self.terminal.name()
    }

    /// Repetitions of the last entry seen so far, zero after a new message
    pub fn repeat_counter(&self) -> u64 {
        self.repeat_counter
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.state.as_ref().map(|state| &state.last_entry)
    }

    /// Draw `entry`, collapsing it into the previous line when it repeats.
    ///
    /// The render state advances even when the stream reports an error, since
    /// part of the line may already be on screen.
    pub fn render(&mut self, entry: Entry) -> io::Result<()> {
        let is_repeat = self
            .state
            .as_ref()
            .is_some_and(|state| state.last_entry == entry);

        let entry = if is_repeat {
            self.repeat_counter += 1;
            self.metrics.record_repeat();
            entry.with_repeat_count(self.repeat_counter)
        } else {
            self.repeat_counter = 0;
            entry.with_repeat_count(0)
        };

        // Re-queried every time, the terminal may have been resized
        let columns = self.terminal.query_columns();
        let erase_rows = if is_repeat {
            self.rows_to_erase(columns)
        } else {
            None
        };

        let width = self.formatter.format_into(&entry, &mut self.line);
        let result = self.draw(entry.level().color_code(), erase_rows);

        self.state = Some(RenderState {
            last_entry: entry.with_repeat_count(0),
            rendered_width: width,
            columns,
        });
        result
    }

    /// Rows the previous line occupies, or `None` when it must not be erased.
    fn rows_to_erase(&self, columns: Option<u16>) -> Option<usize> {
        // no cursor control at all without a current width
        let current = columns?;
        let state = self.state.as_ref()?;
        let columns = if self.terminal.reflows_on_resize() {
            current
        } else {
            state.columns.unwrap_or(current)
        };
        let rows = rows_occupied(state.rendered_width, columns);
        (rows > 0).then_some(rows)
    }

    fn draw(&mut self, color: colored::Color, erase_rows: Option<usize>) -> io::Result<()> {
        if let Some(rows) = erase_rows {
            self.terminal
                .move_cursor_up_and_clear(&mut *self.writer, rows)?;
            self.metrics.record_rewrite();
        }

        self.terminal.set_color(&mut *self.writer, color)?;
        let written = self
            .writer
            .write_all(self.line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"));
        // restore even after a failed write so surrounding output keeps its colour
        let restored = self.terminal.restore_color(&mut *self.writer);
        written?;
        restored?;
        self.writer.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Rows taken by a line of `width` characters on a terminal `columns` wide,
/// assuming one column per character.
pub(crate) fn rows_occupied(width: usize, columns: u16) -> usize {
    if columns == 0 {
        return 0;
    }
    width.div_ceil(usize::from(columns))
}
