//! Splices the body of the top-level `document` environment into the
//! top-level sequence.
//!
//! Everything outside the body (preamble, `\begin{document}`,
//! `\end{document}`, postamble) is tagged as markup so the converter keeps it
//! out of prose. Without a `document` environment the whole input is content.

use latex2tast_syntax::ast::Environment;
use latex2tast_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    Markup(SyntaxElement),
    Content(SyntaxElement),
}

pub fn unwrap_document(root: &SyntaxNode) -> Vec<TopLevel> {
    let document = root
        .children()
        .find(|node| Environment::cast(node.clone()).is_some_and(|env| env.name() == "document"));
    let Some(document) = document else {
        return root.children_with_tokens().map(TopLevel::Content).collect();
    };

    let mut out = Vec::new();
    for element in root.children_with_tokens() {
        if element.as_node() != Some(&document) {
            out.push(TopLevel::Markup(element));
            continue;
        }
        for part in document.children_with_tokens() {
            match part.as_node() {
                Some(body) if body.kind() == SyntaxKind::ENV_BODY => {
                    out.extend(body.children_with_tokens().map(TopLevel::Content));
                }
                _ => out.push(TopLevel::Markup(part)),
            }
        }
    }
    out
}
