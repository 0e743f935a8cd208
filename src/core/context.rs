//! Logging context: the filter slot, the terminal backend and the write path

use super::{
    error::{LoggerError, Result},
    filter::Filter,
    formatter::{PlainFormatter, DEFAULT_MAX_LINE_LEN},
    log_class::LogClass,
    log_entry::Entry,
    log_level::Level,
    metrics::BackendMetrics,
    settings::LoggingSettings,
    source_path::DEFAULT_SOURCE_ROOT,
};
use crate::backends::{ColorMode, NonInteractive, TerminalBackend, TerminalControl};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Owns the installed filter and the terminal backend.
///
/// Create one at startup and share it (`Arc<LoggingContext>` or a `static`)
/// with everything that logs. [`install`](Self::install) and
/// [`emit`](Self::emit) are the only mutation points and both may be called
/// from any thread.
pub struct LoggingContext {
    filter: RwLock<Option<Arc<dyn Filter>>>,
    backend: Mutex<TerminalBackend>,
    source_root: String,
    metrics: Arc<BackendMetrics>,
}

impl LoggingContext {
    /// Context writing to stderr with colour chosen automatically and no filter
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().assemble()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a context from deserialized settings.
    pub fn from_settings(settings: &LoggingSettings) -> Result<Self> {
        Self::builder()
            .color_mode(settings.color)
            .source_root(settings.source_root.clone())
            .filter(settings.level_filter()?)
            .build()
    }

    /// React to a settings commit by re-installing the filter they describe.
    ///
    /// Colour mode and source root are fixed when the context is built and
    /// are not changed here. On a malformed filter string the installed
    /// filter stays in place.
    pub fn apply_settings(&self, settings: &LoggingSettings) -> Result<()> {
        let filter = settings.level_filter()?;
        self.install(filter);
        Ok(())
    }

    /// Replace the active filter. The last install wins.
    pub fn install<F: Filter + 'static>(&self, filter: F) {
        self.install_shared(Arc::new(filter));
    }

    pub fn install_shared(&self, filter: Arc<dyn Filter>) {
        *self.filter.write() = Some(filter);
    }

    /// Remove the active filter so that every entry is accepted
    pub fn clear_filter(&self) {
        *self.filter.write() = None;
    }

    /// Whether the active filter lets `entry` through
    pub fn accepts(&self, entry: &Entry) -> bool {
        self.filter
            .read()
            .as_ref()
            .map_or(true, |filter| filter.accept(entry))
    }

    /// Filter and render one entry.
    ///
    /// The whole operation runs under the backend lock so that lines from
    /// different threads never interleave and each repeat is measured against
    /// the line actually on screen. Output failures are counted, not returned.
    pub fn emit(&self, entry: Entry) {
        let mut backend = self.backend.lock();

        if !self.accepts(&entry) {
            self.metrics.record_filtered();
            return;
        }

        match backend.render(entry) {
            Ok(()) => {
                self.metrics.record_rendered();
            }
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    /// Build an entry with this context's source root.
    pub fn create_entry(
        &self,
        class: LogClass,
        level: Level,
        filename: &str,
        line: u32,
        function: &str,
        args: fmt::Arguments<'_>,
    ) -> Entry {
        Entry::create(class, level, filename, line, function, args, &self.source_root)
    }

    /// Entry point of the logging macros.
    pub fn log(
        &self,
        class: LogClass,
        level: Level,
        filename: &str,
        line: u32,
        function: &str,
        args: fmt::Arguments<'_>,
    ) {
        self.emit(self.create_entry(class, level, filename, line, function, args));
    }

    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    pub fn metrics(&self) -> &BackendMetrics {
        &self.metrics
    }

    /// Name of the terminal control in use
    pub fn terminal_name(&self) -> String {
        self.backend.lock().terminal_name().to_string()
    }

    pub fn flush(&self) -> Result<()> {
        self.backend
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing log output", e))
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        let _ = self.backend.get_mut().flush();
    }
}

/// Builder for [`LoggingContext`]
///
/// # Example
///
/// ```
/// use rust_term_logger::backends::SharedBuffer;
/// use rust_term_logger::{Level, LevelFilter, LoggingContext};
///
/// let output = SharedBuffer::new();
/// let context = LoggingContext::builder()
///     .writer(output.clone())
///     .filter(LevelFilter::new(Level::Warning))
///     .source_root("src")
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    source_root: String,
    color_mode: ColorMode,
    writer: Option<Box<dyn Write + Send>>,
    terminal: Option<Box<dyn TerminalControl>>,
    filter: Option<Arc<dyn Filter>>,
    max_line_len: usize,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
            color_mode: ColorMode::Auto,
            writer: None,
            terminal: None,
            filter: None,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }

    /// Path component marking the root of the source tree
    #[must_use]
    pub fn source_root(mut self, root: impl Into<String>) -> Self {
        self.source_root = root.into();
        self
    }

    /// How terminal control is chosen when writing to stderr.
    ///
    /// Ignored when [`terminal`](Self::terminal) is set.
    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Write somewhere other than stderr.
    ///
    /// Without an explicit [`terminal`](Self::terminal) a custom writer is
    /// treated as non-interactive.
    #[must_use]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    #[must_use]
    pub fn terminal<T: TerminalControl + 'static>(mut self, terminal: T) -> Self {
        self.terminal = Some(Box::new(terminal));
        self
    }

    #[must_use]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Longest rendered line in bytes; longer lines are truncated
    #[must_use]
    pub fn max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn build(self) -> Result<LoggingContext> {
        if self.max_line_len == 0 {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "max_line_len must be at least 1",
            ));
        }
        Ok(self.assemble())
    }

    fn assemble(self) -> LoggingContext {
        let backend = match (self.writer, self.terminal) {
            (None, None) => TerminalBackend::stderr(self.color_mode),
            (writer, terminal) => TerminalBackend::new(
                writer.unwrap_or_else(|| Box::new(io::stderr()) as Box<dyn Write + Send>),
                terminal.unwrap_or_else(|| Box::new(NonInteractive) as Box<dyn TerminalControl>),
            ),
        };

        let metrics = Arc::new(BackendMetrics::new());
        let backend = backend
            .with_formatter(PlainFormatter::with_max_len(self.max_line_len))
            .with_metrics(Arc::clone(&metrics));

        LoggingContext {
            filter: RwLock::new(self.filter),
            backend: Mutex::new(backend),
            source_root: self.source_root,
            metrics,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
