//! # latex2tast-syntax
//!
//! A lossless LaTeX syntax tree using [Rowan] + [Logos], following the
//! [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Lossless
//!
//! The concrete syntax tree keeps every byte of the source: whitespace,
//! comments, the delimiters of every group. Concatenating the tokens gives the
//! input back, and every node knows its exact byte range. Downstream stages
//! rely on this to compute positions and raw slices.
//!
//! ## Pipeline
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! Unlike a Markdown tree, a LaTeX tree is not error tolerant here: unbalanced
//! groups, mismatched environments and unterminated math or verbatim regions
//! are reported as a [`SyntaxError`] and no tree is produced.
//!
//! ## Module Structure
//!
//! ```text
//! latex2tast-syntax/
//! ├── lib.rs           # This file - public API and integration tests
//! ├── syntax_kind.rs   # SyntaxKind enum (tokens + nodes) and Rowan integration
//! ├── lexer.rs         # Logos tokenizer and restartable token stream
//! ├── line_index.rs    # Byte offset → line/column
//! ├── environments.rs  # Verbatim, math and list environment names
//! ├── ast.rs           # Typed views (Command, Group, Environment, Item, Verb)
//! ├── error.rs         # SyntaxError
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, public parse() function
//!     ├── event.rs     # Event enum
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/     # Recursive descent rules
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use latex2tast_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("\\section{Hello}\n").unwrap();
//!
//! assert_eq!(tree.text().to_string(), "\\section{Hello}\n");
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//! let section = tree.children().next().unwrap();
//! assert_eq!(section.kind(), SyntaxKind::COMMAND);
//! ```

pub mod ast;
pub mod environments;
pub mod error;
pub mod lexer;
pub mod line_index;
pub mod parser;
pub mod syntax_kind;

pub use error::SyntaxError;
pub use line_index::{LineIndex, Position, position_at};
pub use parser::parse;
pub use syntax_kind::{LatexLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
