//! Entry filtering policies

use super::error::{LoggerError, Result};
use super::log_class::LogClass;
use super::log_entry::Entry;
use super::log_level::Level;
use std::str::FromStr;

/// Decides whether an entry reaches the backend.
///
/// Installed on a [`LoggingContext`](crate::LoggingContext); when no filter is
/// installed every entry is accepted.
pub trait Filter: Send + Sync {
    fn accept(&self, entry: &Entry) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&Entry) -> bool + Send + Sync,
{
    fn accept(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

/// Per-class minimum level.
///
/// # Example
///
/// ```
/// use rust_term_logger::{Level, LevelFilter, LogClass};
///
/// let mut filter = LevelFilter::new(Level::Info);
/// filter.parse_filter_string("Service.FS:Trace Render:Error").unwrap();
///
/// assert!(filter.check(LogClass::ServiceFs, Level::Trace));
/// assert!(!filter.check(LogClass::Render, Level::Warning));
/// assert!(filter.check(LogClass::Core, Level::Info));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    class_levels: [Level; LogClass::COUNT],
}

impl LevelFilter {
    pub fn new(default_level: Level) -> Self {
        Self {
            class_levels: [default_level; LogClass::COUNT],
        }
    }

    /// Set every class to `level`
    pub fn reset_all(&mut self, level: Level) {
        self.class_levels = [level; LogClass::COUNT];
    }

    pub fn set_class_level(&mut self, class: LogClass, level: Level) {
        self.class_levels[class.index()] = level;
    }

    pub fn class_level(&self, class: LogClass) -> Level {
        self.class_levels[class.index()]
    }

    /// Apply space-separated `<class>:<level>` rules left to right.
    ///
    /// `*` as the class name targets every class. Either all rules apply or,
    /// on the first malformed rule, none do.
    pub fn parse_filter_string(&mut self, filter: &str) -> Result<()> {
        let mut updated = self.clone();
        for rule in filter.split_whitespace() {
            updated.apply_rule(rule)?;
        }
        *self = updated;
        Ok(())
    }

    fn apply_rule(&mut self, rule: &str) -> Result<()> {
        let (class_name, level_name) = rule
            .split_once(':')
            .ok_or_else(|| LoggerError::filter_rule(rule, "expected <class>:<level>"))?;

        let level: Level = level_name
            .parse()
            .map_err(|_| LoggerError::filter_rule(rule, format!("unknown level '{}'", level_name)))?;

        if class_name == "*" {
            self.reset_all(level);
            return Ok(());
        }

        let class: LogClass = class_name
            .parse()
            .map_err(|_| LoggerError::filter_rule(rule, format!("unknown class '{}'", class_name)))?;
        self.set_class_level(class, level);
        Ok(())
    }

    pub fn check(&self, class: LogClass, level: Level) -> bool {
        level >= self.class_level(class)
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Filter for LevelFilter {
    fn accept(&self, entry: &Entry) -> bool {
        self.check(entry.class(), entry.level())
    }
}

impl FromStr for LevelFilter {
    type Err = LoggerError;

    /// Start from `Info` for every class and apply the rules in `s`
    fn from_str(s: &str) -> Result<Self> {
        let mut filter = LevelFilter::default();
        filter.parse_filter_string(s)?;
        Ok(filter)
    }
}
