//! Match highlighting
//!
//! Turns a pattern and a subject text into a [`RenderedDocument`] of
//! alternating plain and matched chunks, plus a navigable list of
//! [`MatchRecord`]s.

pub mod highlighter;
pub mod view;

pub use highlighter::Highlighter;
pub use view::{DocumentView, ViewUpdate};

/// Opaque reference to a matched chunk of the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanHandle(usize);

impl SpanHandle {
    /// Index of the referenced chunk in [`RenderedDocument::chunks`]
    pub fn chunk_index(&self) -> usize {
        self.0
    }
}

/// Background state of a matched span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanHighlight {
    /// Every match not currently selected
    Matched,
    /// The match selected for navigation
    Current,
}

/// A maximal piece of text rendered with one highlight state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub is_match: bool,
}

impl Chunk {
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    pub fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Subject text split into chunks, always starting and ending with a plain chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    chunks: Vec<Chunk>,
}

impl RenderedDocument {
    /// Document holding the whole text as one plain chunk
    pub fn plain(text: &str) -> Self {
        Self {
            chunks: vec![Chunk::plain(text)],
        }
    }

    pub(crate) fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk referenced by a span handle
    pub fn chunk(&self, span: SpanHandle) -> Option<&Chunk> {
        self.chunks.get(span.0)
    }

    /// Concatenation of every chunk, which is the subject text
    pub fn text(&self) -> String {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    /// Number of lines in the document (an empty document has one line)
    pub fn line_count(&self) -> usize {
        1 + self
            .chunks
            .iter()
            .map(|c| c.text.matches('\n').count())
            .sum::<usize>()
    }

    /// Zero-based line on which a span starts
    pub fn line_of(&self, span: SpanHandle) -> usize {
        self.chunks
            .iter()
            .take(span.0)
            .map(|c| c.text.matches('\n').count())
            .sum()
    }
}

impl Default for RenderedDocument {
    fn default() -> Self {
        Self::plain("")
    }
}

/// One match found during a highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based line of the match start
    pub line_number: usize,
    /// 1-based column of the match start, in characters
    pub column_number: usize,
    /// Byte offset of the match in the subject text
    pub start_offset: usize,
    /// Byte length of the match
    pub length: usize,
    pub span: SpanHandle,
}

/// Outcome of the last highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternStatus {
    /// Pattern is empty or whitespace; nothing to match
    Empty,
    Valid { matches: usize },
    /// Pattern failed to compile; the message is a single line
    Invalid { reason: String },
}

impl PatternStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, PatternStatus::Invalid { .. })
    }
}
