//! Regex engine implementation.
//!
//! Compiles patterns with `regex::RegexBuilder` and keeps the last compiled
//! regex so repeated passes over new text do not recompile.

use super::{MatchOptions, MatchSpan, Matcher};
use crate::{RegexplorerError, Result};
use regex::{Regex, RegexBuilder};
use std::cell::RefCell;

/// Compiled regex together with the inputs it was built from
#[derive(Debug, Clone)]
struct CachedRegex {
    pattern: String,
    options: MatchOptions,
    regex: Regex,
}

/// Matcher backed by the `regex` crate
#[derive(Debug, Default)]
pub struct RegexMatcher {
    // find_all takes &self; the cache is an implementation detail
    cache: RefCell<Option<CachedRegex>>,
}

impl RegexMatcher {
    /// Create a matcher with an empty cache
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(None),
        }
    }

    /// Compile a pattern with the given options
    pub fn compile(pattern: &str, options: MatchOptions) -> Result<Regex> {
        RegexBuilder::new(pattern)
            .multi_line(options.multiline)
            .ignore_whitespace(options.ignore_whitespace)
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|e| RegexplorerError::invalid_pattern(pattern, &e.to_string()))
    }

    /// Get the cached regex for the pattern, compiling it if needed
    fn cached_regex(&self, pattern: &str, options: MatchOptions) -> Result<Regex> {
        if let Some(cached) = self.cache.borrow().as_ref() {
            if cached.pattern == pattern && cached.options == options {
                return Ok(cached.regex.clone());
            }
        }

        crate::logging::debug_log(&format!(
            "Compiling pattern {:?} with flags '{}'",
            pattern,
            options.flags()
        ));
        let regex = Self::compile(pattern, options)?;
        *self.cache.borrow_mut() = Some(CachedRegex {
            pattern: pattern.to_string(),
            options,
            regex: regex.clone(),
        });
        Ok(regex)
    }

    /// Whether a compiled regex is currently cached
    pub fn is_cached(&self, pattern: &str, options: MatchOptions) -> bool {
        self.cache
            .borrow()
            .as_ref()
            .map(|c| c.pattern == pattern && c.options == options)
            .unwrap_or(false)
    }
}

impl Matcher for RegexMatcher {
    fn find_all(&self, pattern: &str, text: &str, options: MatchOptions) -> Result<Vec<MatchSpan>> {
        let regex = self.cached_regex(pattern, options)?;

        // find_iter advances past empty matches and never splits a code point
        let spans: Vec<MatchSpan> = regex
            .find_iter(text)
            .map(|m| MatchSpan::new(m.start(), m.len()))
            .collect();

        crate::logging::trace_log(&format!(
            "Pattern {:?} matched {} times in {} bytes",
            pattern,
            spans.len(),
            text.len()
        ));
        Ok(spans)
    }
}
