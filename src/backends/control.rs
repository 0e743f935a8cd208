//! Terminal control capabilities
//!
//! The backend needs three things from the terminal: its width, a way to set
//! and restore the text colour, and a way to erase lines it already wrote.
//! How these are done depends on what the error stream is attached to, so the
//! choice is made once by [`probe`].

use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};

/// When to emit colour and cursor control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour and rewriting only when stderr is a terminal
    #[default]
    Auto,
    /// Always emit ANSI colour; rewriting still requires a known width
    Always,
    /// Plain appended lines
    Never,
}

pub trait TerminalControl: Send {
    /// Current width of the terminal in columns, `None` when unknown.
    fn query_columns(&mut self) -> Option<u16>;

    /// Whether the terminal re-wraps already written lines when resized.
    ///
    /// When it does, the rows taken by the previous line are computed with the
    /// width at erase time instead of the width at write time.
    fn reflows_on_resize(&self) -> bool {
        false
    }

    fn set_color(&mut self, out: &mut dyn Write, color: colored::Color) -> io::Result<()>;

    /// Return to the attribute that was active before [`set_color`](Self::set_color).
    fn restore_color(&mut self, out: &mut dyn Write) -> io::Result<()>;

    /// Move the cursor up `rows` rows, to column 0, and clear to the end of
    /// the screen.
    fn move_cursor_up_and_clear(&mut self, out: &mut dyn Write, rows: usize) -> io::Result<()>;

    fn name(&self) -> &str;
}

/// Where [`AnsiTerminal`] gets its width from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Ask the OS about the process's stderr on every query
    ErrorStream,
    /// Fixed width, for terminals reached through something other than stderr
    Fixed(u16),
    /// Width can never be determined
    Unavailable,
}

/// VT100-style escape sequences.
#[derive(Debug, Clone)]
pub struct AnsiTerminal {
    columns: ColumnSource,
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self {
            columns: ColumnSource::ErrorStream,
        }
    }

    pub fn with_columns(columns: ColumnSource) -> Self {
        Self { columns }
    }
}

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalControl for AnsiTerminal {
    fn query_columns(&mut self) -> Option<u16> {
        match self.columns {
            ColumnSource::ErrorStream => stderr_columns(),
            ColumnSource::Fixed(0) | ColumnSource::Unavailable => None,
            ColumnSource::Fixed(columns) => Some(columns),
        }
    }

    fn set_color(&mut self, out: &mut dyn Write, color: colored::Color) -> io::Result<()> {
        write!(out, "\x1b[{}m", color.to_fg_str())
    }

    fn restore_color(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"\x1b[0m")
    }

    fn move_cursor_up_and_clear(&mut self, out: &mut dyn Write, rows: usize) -> io::Result<()> {
        write!(out, "\x1b[{}A\r\x1b[J", rows)
    }

    fn name(&self) -> &str {
        "ansi"
    }
}

/// Output that is not a terminal: no colour, no width, no cursor movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive;

impl TerminalControl for NonInteractive {
    fn query_columns(&mut self) -> Option<u16> {
        None
    }

    fn set_color(&mut self, _out: &mut dyn Write, _color: colored::Color) -> io::Result<()> {
        Ok(())
    }

    fn restore_color(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_up_and_clear(&mut self, _out: &mut dyn Write, _rows: usize) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "non-interactive"
    }
}

#[cfg(windows)]
pub use native::NativeConsole;

#[cfg(windows)]
mod native {
    use super::{stderr_columns, TerminalControl};
    use crossterm::cursor::{MoveToColumn, MoveUp};
    use crossterm::style::{Color, ResetColor, SetForegroundColor};
    use crossterm::terminal::{Clear, ClearType};
    use crossterm::QueueableCommand;
    use std::io::{self, Write};

    /// Windows console, driven through crossterm so that consoles without
    /// virtual terminal support are handled by the console API.
    ///
    /// The Windows 10 console re-wraps its buffer on resize, so erase
    /// calculations use the width at erase time.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NativeConsole;

    fn console_color(color: colored::Color) -> Color {
        match color {
            colored::Color::BrightBlack => Color::DarkGrey,
            colored::Color::Cyan => Color::DarkCyan,
            colored::Color::White => Color::Grey,
            colored::Color::BrightYellow => Color::Yellow,
            colored::Color::BrightRed => Color::Red,
            colored::Color::BrightMagenta => Color::Magenta,
            _ => Color::Reset,
        }
    }

    impl TerminalControl for NativeConsole {
        fn query_columns(&mut self) -> Option<u16> {
            stderr_columns()
        }

        fn reflows_on_resize(&self) -> bool {
            true
        }

        fn set_color(&mut self, out: &mut dyn Write, color: colored::Color) -> io::Result<()> {
            out.queue(SetForegroundColor(console_color(color)))?;
            out.flush()
        }

        fn restore_color(&mut self, out: &mut dyn Write) -> io::Result<()> {
            out.queue(ResetColor)?;
            out.flush()
        }

        fn move_cursor_up_and_clear(
            &mut self,
            out: &mut dyn Write,
            rows: usize,
        ) -> io::Result<()> {
            let rows = u16::try_from(rows).unwrap_or(u16::MAX);
            out.queue(MoveUp(rows))?
                .queue(MoveToColumn(0))?
                .queue(Clear(ClearType::FromCursorDown))?;
            out.flush()
        }

        fn name(&self) -> &str {
            "native-console"
        }
    }
}

#[cfg(unix)]
fn stderr_columns() -> Option<u16> {
    use std::os::unix::io::AsRawFd;
    terminal_size::terminal_size_using_fd(io::stderr().as_raw_fd())
        .map(|(width, _)| width.0)
        .filter(|&columns| columns > 0)
}

#[cfg(windows)]
fn stderr_columns() -> Option<u16> {
    use std::os::windows::io::AsRawHandle;
    terminal_size::terminal_size_using_handle(io::stderr().as_raw_handle())
        .map(|(width, _)| width.0)
        .filter(|&columns| columns > 0)
}

#[cfg(not(any(unix, windows)))]
fn stderr_columns() -> Option<u16> {
    None
}

/// Pick the terminal control for the process's stderr.
pub fn probe(mode: ColorMode) -> Box<dyn TerminalControl> {
    let interactive = io::stderr().is_terminal();
    match mode {
        ColorMode::Never => Box::new(NonInteractive),
        ColorMode::Auto if !interactive => Box::new(NonInteractive),
        ColorMode::Always if !interactive => Box::new(AnsiTerminal::new()),
        _ => interactive_control(),
    }
}

// The console reflows on resize whether or not it accepts VT sequences
#[cfg(windows)]
fn interactive_control() -> Box<dyn TerminalControl> {
    Box::new(NativeConsole)
}

#[cfg(not(windows))]
fn interactive_control() -> Box<dyn TerminalControl> {
    Box::new(AnsiTerminal::new())
}
