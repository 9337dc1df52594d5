//! Pattern/text state, match-to-chunk mapping and match navigation

use super::view::{DocumentView, ViewUpdate};
use super::{Chunk, MatchRecord, PatternStatus, RenderedDocument, SpanHandle, SpanHighlight};
use crate::logging::{debug_log, warn_log};
use crate::matcher::{MatchOptions, MatchSpan, Matcher, RegexMatcher};
use std::collections::VecDeque;

/// Owns the pattern, the subject text and everything derived from them
pub struct Highlighter<M: Matcher = RegexMatcher> {
    matcher: M,
    options: MatchOptions,
    pattern: String,
    text: String,
    matches: Vec<MatchRecord>,
    document: RenderedDocument,
    current_index: usize,
    status: PatternStatus,
    /// Text changed and the document has not caught up yet
    text_dirty: bool,
    pending: VecDeque<ViewUpdate>,
}

impl Highlighter<RegexMatcher> {
    /// Create a highlighter over the `regex` crate with default options
    pub fn new() -> Self {
        Self::with_matcher(RegexMatcher::new(), MatchOptions::default())
    }
}

impl Default for Highlighter<RegexMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Matcher> Highlighter<M> {
    /// Create a highlighter over any matcher
    pub fn with_matcher(matcher: M, options: MatchOptions) -> Self {
        let mut highlighter = Self {
            matcher,
            options,
            pattern: String::new(),
            text: String::new(),
            matches: Vec::new(),
            document: RenderedDocument::default(),
            current_index: 0,
            status: PatternStatus::Empty,
            text_dirty: false,
            pending: VecDeque::new(),
        };
        highlighter.recompute();
        highlighter
    }

    /// Store a new pattern and highlight again
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.to_string();
        self.recompute();
    }

    /// Store a new subject text and highlight again
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.text_dirty = true;
        self.recompute();
    }

    /// Change matcher options and highlight again
    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
        self.recompute();
    }

    /// Re-run the current pattern over the current text
    pub fn run(&mut self) {
        self.recompute();
    }

    /// Rebuild the match list and the rendered document
    pub fn recompute(&mut self) {
        if self.pattern.trim().is_empty() {
            self.status = PatternStatus::Empty;
            self.publish(RenderedDocument::plain(&self.text), Vec::new());
            return;
        }

        match self
            .matcher
            .find_all(&self.pattern, &self.text, self.options)
        {
            Ok(spans) => {
                let (document, matches) = build_document(&self.text, &spans);
                self.status = PatternStatus::Valid {
                    matches: matches.len(),
                };
                debug_log(&format!(
                    "Pattern {:?} produced {} matches",
                    self.pattern,
                    matches.len()
                ));
                self.publish(document, matches);
            }
            Err(e) => {
                warn_log(&format!("Keeping previous highlighting: {}", e.status_message()));
                self.status = PatternStatus::Invalid {
                    reason: e.status_message(),
                };
                if self.text_dirty {
                    // Never leave stale text on screen
                    self.publish(RenderedDocument::plain(&self.text), Vec::new());
                }
            }
        }
    }

    /// Install a new document and match list, then queue the view updates
    fn publish(&mut self, document: RenderedDocument, matches: Vec<MatchRecord>) {
        self.document = document;
        self.matches = matches;
        self.current_index = 0;
        self.text_dirty = false;

        // Anything still queued refers to the replaced document
        self.pending.clear();
        self.pending.push_back(ViewUpdate::Render);
        if let Some(first) = self.matches.first() {
            self.pending.push_back(ViewUpdate::ScrollIntoView(first.span));
        }
    }

    /// Select a match, wrapping out-of-range indices
    pub fn set_current_index(&mut self, index: isize) {
        let count = self.matches.len();
        let new_index = if index < 0 {
            count.saturating_sub(1)
        } else if index as usize >= count {
            0
        } else {
            index as usize
        };

        let previous_span = self.current_span();
        let new_span = self.matches.get(new_index).map(|m| m.span);
        // Only the latest colour of a span and the latest scroll matter
        self.pending.retain(|update| match update {
            ViewUpdate::Render => true,
            ViewUpdate::SpanHighlight { span, .. } => {
                Some(*span) != previous_span && Some(*span) != new_span
            }
            ViewUpdate::ScrollIntoView(_) => false,
        });

        if let Some(previous) = self.matches.get(self.current_index) {
            self.pending.push_back(ViewUpdate::SpanHighlight {
                span: previous.span,
                highlight: SpanHighlight::Matched,
            });
        }

        self.current_index = new_index;

        if let Some(current) = self.matches.get(new_index) {
            self.pending.push_back(ViewUpdate::SpanHighlight {
                span: current.span,
                highlight: SpanHighlight::Current,
            });
            self.pending.push_back(ViewUpdate::ScrollIntoView(current.span));
        }
    }

    pub fn first(&mut self) {
        self.set_current_index(0);
    }

    pub fn previous(&mut self) {
        self.set_current_index(self.current_index as isize - 1);
    }

    pub fn next(&mut self) {
        self.set_current_index(self.current_index as isize + 1);
    }

    pub fn last(&mut self) {
        self.set_current_index(-1);
    }

    /// Apply every queued update to the view
    pub fn flush<V: DocumentView>(&mut self, view: &mut V) {
        while let Some(update) = self.pending.pop_front() {
            self.apply(update, view);
        }
    }

    /// Apply queued updates up to the first one that needs the new layout.
    /// Returns true if updates are still waiting.
    pub fn flush_layout<V: DocumentView>(&mut self, view: &mut V) -> bool {
        while let Some(update) = self.pending.front().copied() {
            if update.needs_layout() {
                return true;
            }
            self.pending.pop_front();
            self.apply(update, view);
        }
        false
    }

    fn apply<V: DocumentView>(&self, update: ViewUpdate, view: &mut V) {
        match update {
            ViewUpdate::Render => view.render(&self.document, self.current_span()),
            ViewUpdate::SpanHighlight { span, highlight } => {
                view.set_span_background(span, highlight)
            }
            ViewUpdate::ScrollIntoView(span) => view.scroll_into_view(span, &self.document),
        }
    }

    pub fn has_pending_updates(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    pub fn status(&self) -> &PatternStatus {
        &self.status
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_match(&self) -> Option<&MatchRecord> {
        self.matches.get(self.current_index)
    }

    fn current_span(&self) -> Option<SpanHandle> {
        self.current_match().map(|m| m.span)
    }
}

/// Split `text` around `spans` and record line/column for each match
fn build_document(text: &str, spans: &[MatchSpan]) -> (RenderedDocument, Vec<MatchRecord>) {
    let mut chunks = Vec::with_capacity(spans.len() * 2 + 1);
    let mut matches = Vec::with_capacity(spans.len());

    let mut last_end = 0;
    // Running position so every character is counted once over the whole text
    let mut scanned = 0;
    let mut line_number = 1;
    let mut column = 0;

    for span in spans {
        let start = span.start;
        for ch in text[scanned..start].chars() {
            if ch == '\n' {
                line_number += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        scanned = start;

        chunks.push(Chunk::plain(&text[last_end..start]));
        let span_handle = SpanHandle(chunks.len());
        chunks.push(Chunk::matched(&text[start..span.end()]));

        matches.push(MatchRecord {
            line_number,
            column_number: column + 1,
            start_offset: start,
            length: span.length,
            span: span_handle,
        });
        last_end = span.end();
    }
    chunks.push(Chunk::plain(&text[last_end..]));

    (RenderedDocument::from_chunks(chunks), matches)
}
