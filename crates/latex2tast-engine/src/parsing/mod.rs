//! # Parsing
//!
//! LaTeX source to document tree, in stages:
//!
//! ```text
//! text → syntax::parse → normalize → convert → paragraph
//!      → comments → gaps → Document
//! ```
//!
//! Every stage returns a new tree. The only failures are a syntax error from
//! the grammar and a [`StructureError`] from comment placement; unknown
//! constructs only produce [`Warning`]s.

pub mod comments;
pub mod convert;
pub mod gaps;
pub mod node;
pub mod normalize;
pub mod paragraph;
pub mod snapshot;
pub mod source;
pub mod span;

use latex2tast_syntax::SyntaxError;
use thiserror::Error;

pub use comments::StructureError;
pub use convert::{Warning, WarningKind};
pub use node::{Leaf, LeafKind, Node, Parent, ParentKind};
pub use source::Source;
pub use span::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

impl ParseError {
    /// Line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax(e) => (e.line, e.column),
            ParseError::Structure(e) => (e.line, e.column),
        }
    }

    /// The message without its position prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax(e) => e.message.clone(),
            ParseError::Structure(e) => {
                format!("comment cannot be placed inside a `{}` node", e.container)
            }
        }
    }
}

#[derive(Debug)]
pub struct Parsed<'s> {
    pub document: Node<'s>,
    pub warnings: Vec<Warning>,
}

/// Parse `text` into a `Document` node.
pub fn parse(text: &str) -> Result<Node<'_>, ParseError> {
    parse_with_warnings(text).map(|parsed| parsed.document)
}

/// Parse `text`, also returning the unknown macros and environments met.
pub fn parse_with_warnings(text: &str) -> Result<Parsed<'_>, ParseError> {
    let root = latex2tast_syntax::parse(text)?;
    let source = Source::new(text);

    let top = normalize::unwrap_document(&root);
    let mut converter = convert::Converter::new(&source);
    let children = converter.document(top);
    let warnings = converter.finish();

    let document = Node::parent(
        ParentKind::Document,
        source.span(0, text.len()),
        text,
        children,
    );
    let comments = comments::collect(&source, &root);
    let document = comments::reinsert(&document, &comments)?;
    let document = gaps::fill(&source, document);

    log::debug!(
        "parsed {} bytes: {} top-level nodes, {} comments, {} warnings",
        text.len(),
        document.children().len(),
        comments.len(),
        warnings.len()
    );
    Ok(Parsed { document, warnings })
}
