//! # Rust Term Logger
//!
//! A structured logging backend for interactive terminals.
//!
//! ## Features
//!
//! - **Per-class filtering**: `"*:Info Service.FS:Trace"` style level rules
//! - **Severity colours**: ANSI escapes, or the native console on Windows
//! - **Repeat collapsing**: consecutive identical messages are redrawn in place
//!   as a single `Repeated Nx` line
//! - **Thread Safe**: one lock per context serializes every rendered line

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{ColorMode, SharedBuffer, TerminalBackend, TerminalControl};
    pub use crate::core::{
        BackendMetrics, Entry, Filter, Level, LevelFilter, LogClass, LoggerBuilder, LoggerError,
        LoggingContext, LoggingSettings, PlainFormatter, Result,
    };
}

pub use crate::backends::{ColorMode, TerminalBackend, TerminalControl};
pub use crate::core::{
    elapsed_since_start, trim_source_path, BackendMetrics, Entry, Filter, Level, LevelFilter,
    LogClass, LoggerBuilder, LoggerError, LoggingContext, LoggingSettings, PlainFormatter, Result,
    DEFAULT_FILTER, DEFAULT_MAX_LINE_LEN, DEFAULT_SOURCE_ROOT,
};
