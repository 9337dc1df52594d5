//! Terminal text view for the highlighted document
//!
//! Keeps the last rendered text with the byte range of every chunk, which
//! span is current and the vertical scroll position. Only the lines inside
//! the viewport are turned into ratatui lines.

use crate::constants::MAX_LINE_NUM_DIGITS;
use crate::highlight::{DocumentView, RenderedDocument, SpanHandle, SpanHighlight};
use crate::logging::trace_log;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Drawn in place of a zero-length match
const EMPTY_MATCH_MARKER: &str = "▏";

/// Byte range of one chunk in the displayed text
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: usize,
    end: usize,
    is_match: bool,
}

/// Scrollable view of a [`RenderedDocument`]
#[derive(Debug)]
pub struct TextView {
    text: String,
    /// One entry per chunk, in chunk order
    segments: Vec<Segment>,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
    current: Option<SpanHandle>,
    /// First visible line
    scroll: usize,
    /// Visible lines, updated on every draw
    viewport_height: usize,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            text: String::new(),
            segments: Vec::new(),
            line_starts: vec![0],
            current: None,
            scroll: 0,
            viewport_height: 0,
        }
    }
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = usize::from(height);
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
        self.clamp_scroll();
    }

    fn height(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(self.height())
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Zero-based line containing a byte offset
    fn line_at(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Build the styled lines inside the viewport, with a line-number gutter
    pub fn to_text(&self) -> Text<'static> {
        let first = self.scroll.min(self.line_count().saturating_sub(1));
        let last = (first + self.height()).min(self.line_count());

        let lines: Vec<Line<'static>> = (first..last).map(|line| self.line(line)).collect();
        Text::from(lines)
    }

    fn line(&self, line: usize) -> Line<'static> {
        let start = self.line_starts[line];
        // Up to the newline, which belongs to this line
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        let content_end = if self.text[start..end].ends_with('\r') {
            end - 1
        } else {
            end
        };

        let mut spans = vec![gutter(line + 1)];
        let first_segment = self
            .segments
            .partition_point(|segment| segment.start < start)
            .saturating_sub(1);

        for (index, segment) in self.segments.iter().enumerate().skip(first_segment) {
            if segment.start > end {
                break;
            }
            let style = self.segment_style(index, segment);

            if segment.start == segment.end {
                if segment.is_match && segment.start >= start {
                    spans.push(Span::styled(EMPTY_MATCH_MARKER, style));
                }
                continue;
            }

            let from = segment.start.max(start);
            let to = segment.end.min(content_end);
            if from < to {
                spans.push(Span::styled(self.text[from..to].to_string(), style));
            }
        }

        Line::from(spans)
    }

    fn segment_style(&self, index: usize, segment: &Segment) -> Style {
        if !segment.is_match {
            return Style::default();
        }
        if self.current.map(|c| c.chunk_index()) == Some(index) {
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::Yellow).fg(Color::Black)
        }
    }
}

fn gutter(line_number: usize) -> Span<'static> {
    Span::styled(
        format!("{:>width$}| ", line_number, width = MAX_LINE_NUM_DIGITS),
        Style::default().fg(Color::DarkGray),
    )
}

impl DocumentView for TextView {
    fn render(&mut self, document: &RenderedDocument, current: Option<SpanHandle>) {
        self.text.clear();
        self.segments.clear();
        for chunk in document.chunks() {
            let start = self.text.len();
            self.text.push_str(&chunk.text);
            self.segments.push(Segment {
                start,
                end: self.text.len(),
                is_match: chunk.is_match,
            });
        }

        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts.extend(
            self.text
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );

        self.current = current;
        self.clamp_scroll();
    }

    fn set_span_background(&mut self, span: SpanHandle, highlight: SpanHighlight) {
        match highlight {
            SpanHighlight::Current => self.current = Some(span),
            SpanHighlight::Matched => {
                if self.current == Some(span) {
                    self.current = None;
                }
            }
        }
    }

    fn scroll_into_view(&mut self, span: SpanHandle, document: &RenderedDocument) {
        let line = match self.segments.get(span.chunk_index()) {
            Some(segment) => self.line_at(segment.start),
            None => document.line_of(span),
        };
        let height = self.height();

        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
        trace_log(&format!("Scrolled to line {} (offset {})", line, self.scroll));
    }
}
