//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised by the configuration surfaces of the logger.
///
/// The write path (`LoggingContext::emit`) never returns these; output
/// failures there are counted in the backend metrics and dropped.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A single `<class>:<level>` rule could not be parsed
    #[error("Invalid filter rule '{rule}': {message}")]
    InvalidFilterRule { rule: String, message: String },

    /// Name does not match any log class
    #[error("Unknown log class: '{0}'")]
    UnknownLogClass(String),

    /// Name does not match any level
    #[error("Unknown log level: '{0}'")]
    UnknownLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid filter rule error
    pub fn filter_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidFilterRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::filter_rule("Service", "missing ':'");
        assert!(matches!(err, LoggerError::InvalidFilterRule { .. }));

        let err = LoggerError::config("LoggerBuilder", "line limit must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::filter_rule("Render", "missing ':' separator");
        assert_eq!(
            err.to_string(),
            "Invalid filter rule 'Render': missing ':' separator"
        );

        let err = LoggerError::UnknownLogClass("Gpu".to_string());
        assert_eq!(err.to_string(), "Unknown log class: 'Gpu'");

        let err = LoggerError::config("LoggerBuilder", "max_line_len must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerBuilder: max_line_len must be at least 1"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing log line", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log line"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
