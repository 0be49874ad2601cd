use latex2tast_syntax::{LineIndex, SyntaxElement, SyntaxNode};

use super::span::Span;

/// The input text of one parse, with a line index for building spans.
pub struct Source<'s> {
    index: LineIndex<'s>,
}

impl<'s> Source<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            index: LineIndex::new(text),
        }
    }

    pub fn text(&self) -> &'s str {
        self.index.text()
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start,
            end,
            start_pos: self.index.position(start),
            end_pos: self.index.position(end),
        }
    }

    /// Exact source text of `span`; empty if the span is out of bounds.
    pub fn slice(&self, span: Span) -> &'s str {
        self.text().get(span.start..span.end).unwrap_or_default()
    }

    pub fn span_of(&self, element: &SyntaxElement) -> Span {
        let range = element.text_range();
        self.span(range.start().into(), range.end().into())
    }

    pub fn span_of_node(&self, node: &SyntaxNode) -> Span {
        let range = node.text_range();
        self.span(range.start().into(), range.end().into())
    }
}
