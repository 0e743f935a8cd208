//! Core logger types and traits

pub mod context;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod log_class;
pub mod log_entry;
pub mod log_level;
pub mod metrics;
pub mod settings;
pub mod source_path;

pub use context::{LoggerBuilder, LoggingContext};
pub use error::{LoggerError, Result};
pub use filter::{Filter, LevelFilter};
pub use formatter::{PlainFormatter, DEFAULT_MAX_LINE_LEN};
pub use log_class::LogClass;
pub use log_entry::{elapsed_since_start, Entry};
pub use log_level::Level;
pub use metrics::BackendMetrics;
pub use settings::{LoggingSettings, DEFAULT_FILTER};
pub use source_path::{trim_source_path, DEFAULT_SOURCE_ROOT};
