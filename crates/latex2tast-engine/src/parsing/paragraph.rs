//! Groups runs of inline nodes into paragraphs.
//!
//! A scan over the converted flow with an accumulation buffer: inline items
//! accumulate, a block item or a blank line flushes the buffer into a
//! `Paragraph`. Flushing never produces an empty paragraph.

use std::mem;

use super::convert::Flow;
use super::node::{Leaf, LeafKind, Node, ParentKind};
use super::source::Source;

pub fn segment<'s>(source: &Source<'s>, flow: Vec<Flow<'s>>) -> Vec<Node<'s>> {
    let mut builder = ParagraphBuilder::new(source);
    for item in flow {
        builder.push(item);
    }
    builder.finish()
}

struct ParagraphBuilder<'a, 's> {
    source: &'a Source<'s>,
    buffer: Vec<Node<'s>>,
    out: Vec<Node<'s>>,
}

impl<'a, 's> ParagraphBuilder<'a, 's> {
    fn new(source: &'a Source<'s>) -> Self {
        Self {
            source,
            buffer: Vec::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, item: Flow<'s>) {
        match item {
            Flow::Inline(node) => self.buffer.push(node),
            Flow::Block(node) => {
                self.flush();
                self.out.push(node);
            }
            Flow::Break => self.flush(),
        }
    }

    fn flush(&mut self) {
        let nodes = trim(mem::take(&mut self.buffer));
        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            return;
        };
        let span = first.span().cover(last.span());
        let children = merge_text(self.source, nodes);
        self.out.push(Node::parent(
            ParentKind::Paragraph,
            span,
            self.source.slice(span),
            children,
        ));
    }

    fn finish(mut self) -> Vec<Node<'s>> {
        self.flush();
        self.out
    }
}

/// Drop whitespace-only `Str` nodes from both ends.
pub fn trim<'s>(mut nodes: Vec<Node<'s>>) -> Vec<Node<'s>> {
    let end = nodes
        .iter()
        .rposition(|n| !is_blank(n))
        .map_or(0, |i| i + 1);
    nodes.truncate(end);
    let start = nodes.iter().position(|n| !is_blank(n)).unwrap_or(0);
    nodes.drain(..start);
    nodes
}

fn is_blank(node: &Node<'_>) -> bool {
    node.is_str() && node.raw().trim().is_empty()
}

/// Concatenate `Str` nodes that touch. Text separated by anything else,
/// a skipped comment included, stays apart.
pub fn merge_text<'s>(source: &Source<'s>, nodes: Vec<Node<'s>>) -> Vec<Node<'s>> {
    let mut out: Vec<Node<'s>> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(Node::Leaf(Leaf {
            kind: LeafKind::Str { value: text },
            span,
            raw,
        })) = out.last_mut()
            && let Node::Leaf(Leaf {
                kind: LeafKind::Str { value: next },
                span: next_span,
                ..
            }) = &node
            && span.end == next_span.start
        {
            text.push_str(next);
            *span = span.cover(*next_span);
            *raw = source.slice(*span);
            continue;
        }
        out.push(node);
    }
    out
}
