//! # Parser Events
//!
//! The parser does not build the tree directly. It emits a flat sequence of
//! events that the [`Sink`](super::sink::Sink) replays into a rowan tree:
//!
//! ```text
//! Start(COMMAND)
//!   Token(COMMAND_NAME)   \emph
//!   Start(GROUP)
//!     Token(L_BRACE)
//!     Token(TEXT)         word
//!     Token(R_BRACE)
//!   Finish
//! Finish
//! ```
//!
//! Because a fatal error discards the events, a half-built tree is never
//! observable.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Attach the next consumed token to the current node.
    ///
    /// `kind` normally matches the lexer token; literal regions are
    /// re-labelled as `VERBATIM_TEXT`.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    Finish,

    /// Reserved slot for a node whose kind is decided on completion.
    Placeholder,
}

impl Event {
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}
