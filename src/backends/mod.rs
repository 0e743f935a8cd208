//! Output backends and terminal control

pub mod buffer;
pub mod control;
pub mod terminal;

pub use buffer::SharedBuffer;
pub use control::{probe, AnsiTerminal, ColorMode, ColumnSource, NonInteractive, TerminalControl};
pub use terminal::TerminalBackend;

#[cfg(windows)]
pub use control::NativeConsole;
