//! Log entry structure and the entry factory

use super::log_class::LogClass;
use super::log_level::Level;
use super::source_path::trim_source_path;
use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static PROCESS_EPOCH: OnceLock<Instant> = OnceLock::new();

/// Time elapsed since the first entry was created in this process.
pub fn elapsed_since_start() -> Duration {
    PROCESS_EPOCH.get_or_init(Instant::now).elapsed()
}

/// One log event.
///
/// Two entries compare equal when class, level, location and message match;
/// the timestamp and repeat count are ignored so that consecutive occurrences
/// of the same message can be collapsed.
#[derive(Debug, Clone)]
pub struct Entry {
    timestamp: Duration,
    class: LogClass,
    level: Level,
    location: String,
    message: String,
    repeat_count: u64,
}

impl Entry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that every entry renders as exactly one terminal line.
    fn sanitize_message(message: &str) -> String {
        if !message.contains(['\n', '\r', '\t']) {
            return message.to_string();
        }
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        class: LogClass,
        level: Level,
        location: impl Into<String>,
        message: impl AsRef<str>,
    ) -> Self {
        Self {
            timestamp: elapsed_since_start(),
            class,
            level,
            location: location.into(),
            message: Self::sanitize_message(message.as_ref()),
            repeat_count: 0,
        }
    }

    /// Build an entry for a log call site.
    ///
    /// The location is rendered as `file:function:line`, with everything up to
    /// and including `source_root` stripped from `filename`. A `Display`
    /// implementation that fails while formatting `args` does not abort the
    /// call; the text produced so far is kept and marked as incomplete.
    pub fn create(
        class: LogClass,
        level: Level,
        filename: &str,
        line: u32,
        function: &str,
        args: fmt::Arguments<'_>,
        source_root: &str,
    ) -> Self {
        let location = format!(
            "{}:{}:{}",
            trim_source_path(filename, source_root),
            function,
            line
        );
        Self::new(class, level, location, format_message(args))
    }

    /// Replace the timestamp, mostly useful for deterministic output
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Duration) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Copy of this entry stamped with `count` prior repetitions
    #[must_use]
    pub fn with_repeat_count(mut self, count: u64) -> Self {
        self.repeat_count = count;
        self
    }

    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    pub fn class(&self) -> LogClass {
        self.class
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn repeat_count(&self) -> u64 {
        self.repeat_count
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
            && self.level == other.level
            && self.location == other.location
            && self.message == other.message
    }
}

impl Eq for Entry {}

fn format_message(args: fmt::Arguments<'_>) -> String {
    if let Some(literal) = args.as_str() {
        return literal.to_string();
    }
    let mut message = String::new();
    if fmt::write(&mut message, args).is_err() {
        message.push_str(" <formatting error>");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_create_builds_location() {
        let entry = Entry::create(
            LogClass::Kernel,
            Level::Debug,
            "/build/src/kernel/thread.rs",
            42,
            "kernel::thread",
            format_args!("switching to {}", 7),
            "src",
        );
        assert_eq!(entry.location(), "kernel/thread.rs:kernel::thread:42");
        assert_eq!(entry.message(), "switching to 7");
        assert_eq!(entry.repeat_count(), 0);
    }

    #[test]
    fn test_failing_display_degrades() {
        let entry = Entry::create(
            LogClass::Log,
            Level::Info,
            "a.rs",
            1,
            "f",
            format_args!("value={}", Broken),
            "src",
        );
        assert!(entry.message().starts_with("value="));
        assert!(entry.message().ends_with("<formatting error>"));
    }

    #[test]
    fn test_equality_ignores_timestamp_and_count() {
        let a = Entry::new(LogClass::Core, Level::Info, "x.rs:f:1", "boot complete")
            .with_timestamp(Duration::from_secs(1));
        let b = a
            .clone()
            .with_timestamp(Duration::from_secs(9))
            .with_repeat_count(3);
        assert_eq!(a, b);

        let c = Entry::new(LogClass::Core, Level::Info, "x.rs:f:1", "boot failed");
        assert_ne!(a, c);
        let d = Entry::new(LogClass::Core, Level::Warning, "x.rs:f:1", "boot complete");
        assert_ne!(a, d);
    }

    #[test]
    fn test_message_is_single_line() {
        let entry = Entry::new(LogClass::Log, Level::Info, "", "one\ntwo\tthree");
        assert_eq!(entry.message(), "one\\ntwo\\tthree");
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let first = Entry::new(LogClass::Log, Level::Info, "", "a");
        let second = Entry::new(LogClass::Log, Level::Info, "", "b");
        assert!(second.timestamp() >= first.timestamp());
    }
}
