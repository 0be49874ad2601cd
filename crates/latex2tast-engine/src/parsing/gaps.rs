//! Covers source text between adjacent children with `Html` filler leaves,
//! so a container's children leave no gap from the first to the last.

use super::node::{LeafKind, Node};
use super::source::Source;

pub fn fill<'s>(source: &Source<'s>, node: Node<'s>) -> Node<'s> {
    let Node::Parent(mut parent) = node else {
        return node;
    };
    let children = std::mem::take(&mut parent.children);
    let mut out = Vec::with_capacity(children.len() * 2);
    let mut previous_end = None;
    for child in children {
        let span = child.span();
        if let Some(end) = previous_end
            && end < span.start
        {
            let gap = source.span(end, span.start);
            let raw = source.slice(gap);
            out.push(Node::leaf(
                LeafKind::Html {
                    value: raw.to_string(),
                },
                gap,
                raw,
            ));
        }
        previous_end = Some(span.end);
        out.push(fill(source, child));
    }
    parent.children = out;
    Node::Parent(parent)
}
