//! Input validation and sanitization.
//!
//! Provides validation for typed patterns and file paths. Regex syntax is
//! never checked here; malformed patterns are the highlighter's business.

use crate::constants::*;
use crate::{RegexplorerError, Result};

/// Input validator for patterns and user inputs
pub struct InputValidator;

impl InputValidator {
    /// Checks that a pattern stays within the accepted length
    pub fn validate_pattern_length(pattern: &str) -> Result<()> {
        if pattern.chars().count() > PATTERN_MAX_LENGTH {
            return Err(RegexplorerError::InvalidInput(format!(
                "Pattern cannot be longer than {} characters",
                PATTERN_MAX_LENGTH
            )));
        }
        Ok(())
    }

    /// Validates and trims a file path typed at the open-file prompt
    pub fn validate_file_path(path: &str) -> Result<String> {
        let trimmed = path.trim();

        if trimmed.is_empty() {
            return Err(RegexplorerError::InvalidInput(
                "File path cannot be empty".to_string(),
            ));
        }

        if trimmed.contains('\0') {
            return Err(RegexplorerError::InvalidInput(
                "File path contains null bytes".to_string(),
            ));
        }

        if trimmed.len() > MAX_PATH_LENGTH {
            return Err(RegexplorerError::InvalidInput(format!(
                "File path is too long (max length is {} characters)",
                MAX_PATH_LENGTH
            )));
        }

        Ok(trimmed.to_string())
    }
}
