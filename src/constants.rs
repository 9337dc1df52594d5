//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

pub const APP_NAME: &str = "RegExplorer";
pub const PATTERN_MAX_LENGTH: usize = 1000;
pub const MAX_PATH_LENGTH: usize = 4096;
/// Largest file accepted as subject text (16 MiB)
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;
pub const MAX_LINE_NUM_DIGITS: usize = 4;
pub const PAGE_SCROLL_LINES: usize = 10;
pub const EVENT_POLL_MS: u64 = 100;
/// Longest matched text shown in the match list before truncation
pub const MATCH_PREVIEW_CHARS: usize = 40;
