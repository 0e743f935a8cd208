//! Logging settings as stored by the surrounding application

use super::error::Result;
use super::filter::LevelFilter;
use super::source_path::DEFAULT_SOURCE_ROOT;
use crate::backends::ColorMode;
use serde::{Deserialize, Serialize};

/// Filter used when the settings do not name one
pub const DEFAULT_FILTER: &str = "*:Info";

/// Serializable logging configuration.
///
/// Missing fields take their defaults, so a partial settings file such as
/// `{"filter": "*:Debug Render:Trace"}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Space-separated `<class>:<level>` rules
    pub filter: String,
    pub color: ColorMode,
    pub source_root: String,
}

impl LoggingSettings {
    /// Parse [`filter`](Self::filter) into a [`LevelFilter`]
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.filter.parse()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            color: ColorMode::Auto,
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
        }
    }
}
