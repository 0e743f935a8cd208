//! Logging macros for call sites.
//!
//! Each macro captures the file, line and module path of the call site and
//! passes a compile-time checked format template to
//! [`LoggingContext::log`](crate::LoggingContext::log).
//!
//! # Examples
//!
//! ```
//! use rust_term_logger::backends::SharedBuffer;
//! use rust_term_logger::prelude::*;
//! use rust_term_logger::info;
//!
//! let output = SharedBuffer::new();
//! let context = LoggingContext::builder().writer(output.clone()).build().unwrap();
//!
//! // Basic logging
//! info!(context, LogClass::Frontend, "Window created");
//!
//! // With format arguments
//! let (width, height) = (1280, 720);
//! info!(context, LogClass::Render, "Resolution {}x{}", width, height);
//!
//! assert!(output.contents().contains("Resolution 1280x720"));
//! ```

/// Log a message with an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_term_logger::prelude::*;
/// # let context = LoggingContext::builder().writer(SharedBuffer::new()).build().unwrap();
/// use rust_term_logger::log;
/// log!(context, LogClass::Core, Level::Info, "Simple message");
/// log!(context, LogClass::Core, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($context:expr, $class:expr, $level:expr, $($arg:tt)+) => {
        $context.log(
            $class,
            $level,
            file!(),
            line!(),
            module_path!(),
            format_args!($($arg)+),
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_term_logger::prelude::*;
/// # let context = LoggingContext::builder().writer(SharedBuffer::new()).build().unwrap();
/// use rust_term_logger::trace;
/// trace!(context, LogClass::Kernel, "Entering scheduler");
/// trace!(context, LogClass::Kernel, "Thread {} runnable", 3);
/// ```
#[macro_export]
macro_rules! trace {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_term_logger::prelude::*;
/// # let context = LoggingContext::builder().writer(SharedBuffer::new()).build().unwrap();
/// use rust_term_logger::warning;
/// warning!(context, LogClass::Audio, "Buffer underrun");
/// warning!(context, LogClass::Network, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($context:expr, $class:expr, $($arg:tt)+) => {
        $crate::log!($context, $class, $crate::Level::Critical, $($arg)+)
    };
}
