//! # latex2tast-engine
//!
//! Converts LaTeX source into the document tree prose linters walk: a
//! `Document` of paragraphs, headers, lists, tables and code blocks whose
//! nodes carry exact source spans and raw slices.
//!
//! ```
//! let document = latex2tast_engine::parse("\\section{Title}\nbody text").unwrap();
//! let kinds: Vec<_> = document
//!     .children()
//!     .iter()
//!     .map(|node| node.type_name())
//!     .collect();
//! assert_eq!(kinds, ["Header", "Html", "Paragraph"]);
//! ```

pub mod parsing;

pub use parsing::{
    Leaf, LeafKind, Node, ParseError, Parent, ParentKind, Parsed, Span, StructureError, Warning,
    WarningKind, parse, parse_with_warnings,
};
