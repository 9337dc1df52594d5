//! Regular expression matching boundary
//!
//! Everything above this module sees the regex engine only through
//! [`Matcher::find_all`], which yields non-overlapping matches left to right.

pub mod engine;

pub use engine::RegexMatcher;

use crate::Result;

/// A single match as a byte range of the subject text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub length: usize,
}

impl MatchSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Byte offset one past the end of the match
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Options passed to the regex engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// `^` and `$` match at line boundaries
    pub multiline: bool,
    /// Whitespace in the pattern is ignored and `#` starts a comment
    pub ignore_whitespace: bool,
    pub case_insensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            multiline: true,
            ignore_whitespace: true,
            case_insensitive: false,
        }
    }
}

impl MatchOptions {
    /// Short flag summary for the status bar, e.g. `mx`
    pub fn flags(&self) -> String {
        let mut flags = String::new();
        if self.case_insensitive {
            flags.push('i');
        }
        if self.multiline {
            flags.push('m');
        }
        if self.ignore_whitespace {
            flags.push('x');
        }
        flags
    }
}

/// Finds every match of a pattern in a text
pub trait Matcher {
    /// Returns all non-overlapping matches in left-to-right order, or
    /// `InvalidPattern` when the pattern does not compile
    fn find_all(&self, pattern: &str, text: &str, options: MatchOptions) -> Result<Vec<MatchSpan>>;
}
