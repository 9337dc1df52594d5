//! Error handling.
//!
//! This module provides a custom error type for the project.

use colored::*;
use std::fmt;

/// Result type alias for regexplorer.
pub type Result<T> = std::result::Result<T, RegexplorerError>;

/// Main error type for regexplorer.
#[derive(Debug)]
pub enum RegexplorerError {
    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering error.
    TuiError(String),

    /// Input validation error.
    InvalidInput(String),

    /// Malformed regular expression.
    InvalidPattern { pattern: String, reason: String },

    /// Terminal related error.
    TerminalError(String),

    /// File access error.
    FileAccessError { path: String, reason: String },
}

impl fmt::Display for RegexplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            RegexplorerError::IoError(err) => format!("IO error: {}", err),
            RegexplorerError::TuiError(err) => format!("TUI error: {}", err),
            RegexplorerError::InvalidInput(err) => format!("Invalid input: {}", err),
            RegexplorerError::InvalidPattern { pattern, reason } => {
                format!("Invalid pattern: {}\n reason: {}", pattern, reason)
            }
            RegexplorerError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            RegexplorerError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for RegexplorerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegexplorerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RegexplorerError {
    fn from(err: std::io::Error) -> Self {
        RegexplorerError::IoError(err)
    }
}

impl RegexplorerError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        RegexplorerError::TerminalError(err.to_string())
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        RegexplorerError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        RegexplorerError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is recoverable without leaving the TUI
    pub fn is_recoverable(&self) -> bool {
        match self {
            RegexplorerError::InvalidInput(_) => true,
            RegexplorerError::InvalidPattern { .. } => true,
            RegexplorerError::FileAccessError { .. } => true,
            RegexplorerError::TerminalError(_) => false,
            RegexplorerError::IoError(_) => false,
            RegexplorerError::TuiError(_) => false,
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            RegexplorerError::InvalidInput(..) => {
                Some("Please check your input and try again.".to_string())
            }
            RegexplorerError::InvalidPattern { .. } => {
                Some("Check the pattern for unbalanced brackets or groups.".to_string())
            }
            RegexplorerError::FileAccessError { .. } => {
                Some("Check the file path and permissions and try again.".to_string())
            }
            _ => None,
        }
    }

    /// One-line message without colour codes, for the status bar
    pub fn status_message(&self) -> String {
        match self {
            RegexplorerError::InvalidPattern { reason, .. } => {
                // regex errors are multi-line; the last line carries the cause
                let cause = reason.lines().last().unwrap_or(reason.as_str()).trim();
                let cause = cause.strip_prefix("error: ").unwrap_or(cause);
                format!("invalid pattern: {}", cause)
            }
            RegexplorerError::FileAccessError { path, reason } => {
                format!("cannot open {}: {}", path, reason)
            }
            RegexplorerError::InvalidInput(msg) => format!("invalid input: {}", msg),
            RegexplorerError::IoError(err) => format!("io error: {}", err),
            RegexplorerError::TuiError(msg) => format!("tui error: {}", msg),
            RegexplorerError::TerminalError(msg) => format!("terminal error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegexplorerError::InvalidInput("input test error".to_string());
        assert!(err.to_string().contains("Invalid input:"));
        assert!(err.to_string().contains("input test error"));

        let err = RegexplorerError::InvalidPattern {
            pattern: "[a-".to_string(),
            reason: "unclosed character class".to_string(),
        };
        assert!(err.to_string().contains("Invalid pattern:"));
        assert!(err.to_string().contains("reason:"));

        let err = RegexplorerError::TerminalError("terminal test error".to_string());
        assert!(err.to_string().contains("Terminal error:"));
        assert!(err
            .to_string()
            .contains("Try running in a proper terminal."));

        let err = RegexplorerError::FileAccessError {
            path: "/path".to_string(),
            reason: "access reason".to_string(),
        };
        assert!(err.to_string().contains("File access error:"));
        assert!(err.to_string().contains("Path:"));
        assert!(err.to_string().contains("Reason:"));
    }

    #[test]
    fn test_error_helper_functions() {
        let err = RegexplorerError::invalid_pattern("pattern", "reason");
        assert!(matches!(err, RegexplorerError::InvalidPattern { .. }));

        let err = RegexplorerError::terminal_error("terminal error");
        assert!(matches!(err, RegexplorerError::TerminalError(_)));

        let err = RegexplorerError::file_access_error("/path/to/file", "access denied");
        assert!(matches!(err, RegexplorerError::FileAccessError { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: RegexplorerError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, RegexplorerError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(RegexplorerError::InvalidInput("input error".to_string()).is_recoverable());
        assert!(RegexplorerError::invalid_pattern("(", "unclosed group").is_recoverable());
        assert!(RegexplorerError::file_access_error("/path", "reason").is_recoverable());

        assert!(!RegexplorerError::TerminalError("terminal error".to_string()).is_recoverable());
        assert!(!RegexplorerError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            "io error"
        ))
        .is_recoverable());
        assert!(!RegexplorerError::TuiError("tui error".to_string()).is_recoverable());
    }

    #[test]
    fn test_recovery_suggestion() {
        let err = RegexplorerError::InvalidInput("input error".to_string());
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Please check your input and try again."
        );

        let err = RegexplorerError::invalid_pattern("(", "unclosed group");
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Check the pattern for unbalanced brackets or groups."
        );

        let err = RegexplorerError::file_access_error("/path", "reason");
        assert_eq!(
            err.get_recovery_suggestion().unwrap(),
            "Check the file path and permissions and try again."
        );

        let err = RegexplorerError::TuiError("tui error".to_string());
        assert!(err.get_recovery_suggestion().is_none());
    }

    #[test]
    fn test_status_message_is_single_line() {
        let err = RegexplorerError::invalid_pattern("[a-", "regex parse error:\n    [a-\n    ^\nerror: unclosed character class");
        let msg = err.status_message();
        assert_eq!(msg, "invalid pattern: unclosed character class");
        assert!(!msg.contains('\n'));

        let err = RegexplorerError::file_access_error("notes.txt", "not found");
        assert_eq!(err.status_message(), "cannot open notes.txt: not found");
    }
}
