//! Subject text loading.
//!
//! Reads a whole file into memory so it can become the text being matched.

use crate::constants::MAX_FILE_SIZE;
use crate::logging::{info_log, warn_log};
use crate::validation::InputValidator;
use crate::{RegexplorerError, Result};
use std::fs;
use std::path::Path;

/// Loads subject text from files
pub struct DocumentLoader;

impl DocumentLoader {
    /// Read an entire file as text.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let metadata = fs::metadata(path)
            .map_err(|e| RegexplorerError::file_access_error(&display, &e.to_string()))?;

        if !metadata.is_file() {
            return Err(RegexplorerError::file_access_error(&display, "not a regular file"));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(RegexplorerError::file_access_error(
                &display,
                &format!(
                    "file is {} bytes, larger than the {} byte limit",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        let bytes =
            fs::read(path).map_err(|e| RegexplorerError::file_access_error(&display, &e.to_string()))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn_log(&format!("{} is not valid UTF-8, replacing invalid bytes", display));
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        info_log(&format!("Loaded {} bytes from {}", text.len(), display));
        Ok(text)
    }

    /// Validate a typed path, then load it
    pub fn load_from_input(input: &str) -> Result<String> {
        let path = InputValidator::validate_file_path(input)?;
        Self::load_text(path)
    }
}
