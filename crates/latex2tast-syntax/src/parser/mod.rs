//! # Parser - Event-Based Tree Construction
//!
//! Recursive descent over a lazily lexed [`TokenStream`], emitting
//! [`Event`]s that the [`Sink`] turns into a rowan tree.
//!
//! ## The Marker System
//!
//! `parser.start()` reserves a slot and hands back a [`Marker`], which must be
//! completed with `marker.complete(parser, KIND)`. Dropping a marker without
//! completing it panics. Grammar rules that can fail complete their marker
//! first and propagate the error afterwards:
//!
//! ```ignore
//! let m = p.start();
//! p.bump();                                // `{`
//! let result = delimited(p, ctx);
//! m.complete(p, SyntaxKind::GROUP);
//! result
//! ```
//!
//! ## Failure
//!
//! Parsing is all or nothing. Any [`SyntaxError`] aborts the parse and the
//! collected events are dropped.
//!
//! ```
//! use latex2tast_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("\\emph{hi}").unwrap();
//! assert_eq!(tree.first_child().map(|n| n.kind()), Some(SyntaxKind::COMMAND));
//!
//! let err = parse("\\begin{a}x\\end{b}").unwrap_err();
//! assert!(err.message.contains("\\end{b}"));
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::error::SyntaxError;
use crate::lexer::{Token, TokenStream};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Grammar functions receive `&mut Parser` and use its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `at()`, `at_command()`, `at_end()`
/// - Consume tokens: `bump()`, `eat()`, `bump_literal()`
/// - Build structure: `start()` → `Marker` → `complete()`
pub struct Parser<'input> {
    source: &'input str,
    tokens: TokenStream<'input>,
    consumed: Vec<Token<'input>>,
    events: Vec<Event>,
}

impl<'input> Parser<'input> {
    pub fn new(source: &'input str) -> Self {
        Self {
            source,
            tokens: TokenStream::new(source),
            consumed: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Parse the whole input and return a syntax tree.
    pub fn parse(mut self) -> Result<SyntaxNode, SyntaxError> {
        grammar::root(&mut self)?;
        let sink = Sink::new(&self.consumed, self.events);
        Ok(sink.finish())
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    pub fn source(&self) -> &'input str {
        self.source
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&mut self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&mut self, n: usize) -> SyntaxKind {
        self.tokens.peek(n).map_or(SyntaxKind::EOF, |t| t.kind)
    }

    /// Text of the token n positions ahead, empty past the end.
    pub fn nth_text(&mut self, n: usize) -> &'input str {
        self.tokens.peek(n).map_or("", |t| t.text)
    }

    pub fn current_text(&mut self) -> &'input str {
        self.nth_text(0)
    }

    pub fn at_end(&mut self) -> bool {
        self.tokens.peek(0).is_none()
    }

    pub fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// True if the current token is the command `name` (including backslash).
    pub fn at_command(&mut self, name: &str) -> bool {
        self.at(SyntaxKind::COMMAND_NAME) && self.current_text() == name
    }

    /// Byte offset of the current token.
    pub fn offset(&mut self) -> usize {
        self.tokens.offset()
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if let Some(token) = self.tokens.next() {
            self.events.push(Event::token(token.kind));
            self.consumed.push(token);
        }
    }

    /// Consume everything from the current offset up to `end` as one token of
    /// `kind`, without tokenizing it. Lexing resumes at `end`.
    pub fn bump_literal(&mut self, end: usize, kind: SyntaxKind) {
        let start = self.offset();
        if end > start {
            self.consumed.push(Token {
                kind,
                text: &self.source[start..end],
                offset: start,
            });
            self.events.push(Event::token(kind));
        }
        self.tokens.seek(end);
    }

    /// Shorten the current token to its first `len` bytes.
    pub fn split_current(&mut self, len: usize) {
        self.tokens.shorten_next(len);
    }

    /// Error located at the current token.
    pub fn error(&mut self, message: impl Into<String>) -> SyntaxError {
        let offset = self.offset();
        self.error_at(offset, message)
    }

    pub fn error_at(&self, offset: usize, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.source, offset, message)
    }
}

/// A marker for a node being constructed.
///
/// `parser.start()` pushes a `Placeholder` event and returns a `Marker`
/// pointing at it; `complete` turns the placeholder into a `Start` and pushes
/// the matching `Finish`. Dropping an uncompleted marker panics, which catches
/// grammar bugs instead of producing corrupt trees.
#[must_use = "Markers must be completed, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    completed: bool,
}

impl Marker {
    pub fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be completed");
        }
    }
}

/// Parse LaTeX source into a lossless syntax tree.
pub fn parse(source: &str) -> Result<SyntaxNode, SyntaxError> {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_empty_input() {
        let tree = parse("").unwrap();
        assert_eq!(tree.kind(), SyntaxKind::ROOT);
        assert_eq!(tree.children().count(), 0);
    }

    #[test]
    fn parse_preserves_all_text() {
        let input = "Hello, {world}!";
        let tree = parse(input).unwrap();
        assert_eq!(tree.text(), input);
    }

    #[test]
    fn marker_must_be_completed() {
        let result = std::panic::catch_unwind(|| {
            let mut parser = Parser::new("test");
            let _marker = parser.start();
        });
        assert!(result.is_err());
    }

    #[test]
    fn bump_literal_skips_tokenizing() {
        let mut parser = Parser::new("a%b}c");
        let m = parser.start();
        parser.bump_literal(3, SyntaxKind::VERBATIM_TEXT);
        parser.bump();
        parser.bump();
        m.complete(&mut parser, SyntaxKind::ROOT);
        let tree = parser.parse_events_only();
        let kinds: Vec<_> = tree
            .children_with_tokens()
            .map(|e| e.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::VERBATIM_TEXT,
                SyntaxKind::R_BRACE,
                SyntaxKind::TEXT
            ]
        );
    }

    impl Parser<'_> {
        /// Build a tree from the events collected so far.
        fn parse_events_only(self) -> SyntaxNode {
            Sink::new(&self.consumed, self.events).finish()
        }
    }

    #[test]
    fn errors_carry_line_and_column() {
        let err = parse("a\n  }").unwrap_err();
        assert_eq!((err.line, err.column, err.offset), (2, 2, 4));
    }
}
