//! View boundary for the highlighter
//!
//! The highlighter never holds a view. It queues [`ViewUpdate`]s and the
//! owner of the view drains them into a [`DocumentView`].

use super::{RenderedDocument, SpanHandle, SpanHighlight};

/// Presentation side of the highlighter
pub trait DocumentView {
    /// Replace the displayed document; `current` is the span to emphasize
    fn render(&mut self, document: &RenderedDocument, current: Option<SpanHandle>);

    /// Change the background of one matched span
    fn set_span_background(&mut self, span: SpanHandle, highlight: SpanHighlight);

    /// Bring a span into the visible part of the view
    fn scroll_into_view(&mut self, span: SpanHandle, document: &RenderedDocument);
}

/// Change queued by the highlighter for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    Render,
    SpanHighlight {
        span: SpanHandle,
        highlight: SpanHighlight,
    },
    ScrollIntoView(SpanHandle),
}

impl ViewUpdate {
    /// Scrolling waits until the new document has been laid out
    pub fn needs_layout(&self) -> bool {
        matches!(self, ViewUpdate::ScrollIntoView(_))
    }
}
