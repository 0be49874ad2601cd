//! Threads comments back into the converted tree.
//!
//! The converter skips comment tokens, so each comment is placed afterwards
//! by source position, compared by line and then column. At each level a
//! comment goes:
//!
//! 1. before the first sibling that starts at or after the comment's end;
//! 2. otherwise into the sibling that contains it;
//! 3. otherwise after the last sibling.
//!
//! Comments inside markup leaves (`Code`, `CodeBlock`, `Image`, `Html`, and
//! `Break` with its optional length) have no prose meaning and are dropped.

use latex2tast_syntax::{SyntaxKind, SyntaxNode};
use thiserror::Error;

use super::node::{Leaf, LeafKind, Node, Parent};
use super::source::Source;
use super::span::Span;

/// A comment fell inside a leaf that cannot hold one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: comment cannot be placed inside a `{container}` node")]
pub struct StructureError {
    pub line: usize,
    pub column: usize,
    pub comment: Span,
    pub container: &'static str,
}

impl StructureError {
    fn new(comment: Span, container: &'static str) -> Self {
        Self {
            line: comment.start_pos.line,
            column: comment.start_pos.column,
            comment,
            container,
        }
    }
}

/// Every comment token of the syntax tree as a `Comment` leaf, in source
/// order.
pub fn collect<'s>(source: &Source<'s>, root: &SyntaxNode) -> Vec<Node<'s>> {
    root.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| token.kind() == SyntaxKind::COMMENT)
        .map(|token| {
            let range = token.text_range();
            let span = source.span(range.start().into(), range.end().into());
            let raw = source.slice(span);
            let value = raw.strip_prefix('%').unwrap_or(raw).to_string();
            Node::leaf(LeafKind::Comment { value }, span, raw)
        })
        .collect()
}

/// Return a copy of `tree` with `comments` threaded in. `comments` must be in
/// source order.
pub fn reinsert<'s>(tree: &Node<'s>, comments: &[Node<'s>]) -> Result<Node<'s>, StructureError> {
    place(tree, comments)
}

/// `node` with the comments it contains.
fn place<'s>(node: &Node<'s>, comments: &[Node<'s>]) -> Result<Node<'s>, StructureError> {
    if comments.is_empty() {
        return Ok(node.clone());
    }
    match node {
        Node::Parent(parent) => Ok(Node::Parent(Parent {
            kind: parent.kind.clone(),
            span: parent.span,
            raw: parent.raw,
            children: thread(&parent.children, comments)?,
        })),
        Node::Leaf(Leaf { kind, .. }) => match kind {
            LeafKind::Code { .. }
            | LeafKind::CodeBlock { .. }
            | LeafKind::Image { .. }
            | LeafKind::Html { .. }
            | LeafKind::Break => Ok(node.clone()),
            LeafKind::Str { .. } | LeafKind::Comment { .. } => {
                Err(StructureError::new(comments[0].span(), node.type_name()))
            }
        },
    }
}

/// Siblings with comments interleaved. One pass: both lists are in source
/// order, so a cursor over the comments suffices.
fn thread<'s>(
    children: &[Node<'s>],
    comments: &[Node<'s>],
) -> Result<Vec<Node<'s>>, StructureError> {
    let mut out = Vec::with_capacity(children.len() + comments.len());
    let mut next = 0;
    for child in children {
        let span = child.span();
        while let Some(comment) = comments.get(next)
            && span.starts_after(comment.span())
        {
            out.push(comment.clone());
            next += 1;
        }
        let inside = next;
        while let Some(comment) = comments.get(next)
            && span.contains(comment.span())
        {
            next += 1;
        }
        out.push(place(child, &comments[inside..next])?);
    }
    out.extend_from_slice(&comments[next..]);
    Ok(out)
}
