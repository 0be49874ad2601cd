//! # Lexer - Tokenizing LaTeX Source
//!
//! This module breaks source text into tokens using the [Logos] lexer
//! generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the input appears in exactly one token. Nothing is skipped,
//! which is what makes round-tripping possible:
//!
//! ```
//! use latex2tast_syntax::lexer::lex;
//!
//! let input = "\\section{Intro} % todo\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Context-free tokens, context-sensitive regions
//!
//! The token set itself knows nothing about environments: `\begin` is just a
//! [`COMMAND_NAME`](SyntaxKind::COMMAND_NAME). Regions whose content must not
//! be tokenized (verbatim bodies, `\verb`, URLs) are handled by the parser,
//! which pulls tokens lazily from a [`TokenStream`] and can restart it at any
//! byte offset.
//!
//! ## Public API
//!
//! - [`lex`] - Tokenize the whole input, returning `Vec<Token>`
//! - [`TokenStream`] - Lazy, restartable token source used by the parser
//! - [`Token`] - A token with its kind, text slice and byte offset

use std::collections::VecDeque;

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// Exists separately from [`SyntaxKind`] because Logos needs to derive on it.
/// Each variant maps to a `SyntaxKind` token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"")]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// Line ending followed by one or more blank lines
    #[regex(r"\r?\n([ \t]*\r?\n)+")]
    Parbreak,

    /// `%` to the end of the line
    #[regex(r"%[^\r\n]*")]
    Comment,

    /// `\name`, optionally starred
    #[regex(r"\\[a-zA-Z@]+\*?")]
    CommandName,

    /// `\` followed by a single non-letter
    #[regex(r"\\[^a-zA-Z@]")]
    Escape,

    #[token("\\(", priority = 10)]
    InlineMathOpen,

    #[token("\\)", priority = 10)]
    InlineMathClose,

    #[token("\\[", priority = 10)]
    DisplayMathOpen,

    #[token("\\]", priority = 10)]
    DisplayMathClose,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("&")]
    Ampersand,

    #[token("$")]
    Dollar,

    #[token("$$")]
    DoubleDollar,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\\\s%{}\[\]$&]+")]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Parbreak => SyntaxKind::PARBREAK,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::CommandName => SyntaxKind::COMMAND_NAME,
            TokenKind::Escape => SyntaxKind::ESCAPE,
            TokenKind::InlineMathOpen => SyntaxKind::INLINE_MATH_OPEN,
            TokenKind::InlineMathClose => SyntaxKind::INLINE_MATH_CLOSE,
            TokenKind::DisplayMathOpen => SyntaxKind::DISPLAY_MATH_OPEN,
            TokenKind::DisplayMathClose => SyntaxKind::DISPLAY_MATH_CLOSE,
            TokenKind::LBrace => SyntaxKind::L_BRACE,
            TokenKind::RBrace => SyntaxKind::R_BRACE,
            TokenKind::LBracket => SyntaxKind::L_BRACKET,
            TokenKind::RBracket => SyntaxKind::R_BRACKET,
            TokenKind::Ampersand => SyntaxKind::AMPERSAND,
            TokenKind::Dollar => SyntaxKind::DOLLAR,
            TokenKind::DoubleDollar => SyntaxKind::DOUBLE_DOLLAR,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind, text slice and starting byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Lazily lexed tokens with arbitrary lookahead.
///
/// The stream can be restarted at any byte offset with [`seek`](Self::seek),
/// discarding whatever was already looked at. The parser uses this to step
/// over literal regions that must not be tokenized.
pub struct TokenStream<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, TokenKind>,
    base: usize,
    lookahead: VecDeque<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::starting_at(source, 0)
    }

    fn starting_at(source: &'a str, offset: usize) -> Self {
        Self {
            source,
            lexer: TokenKind::lexer(&source[offset..]),
            base: offset,
            lookahead: VecDeque::new(),
        }
    }

    /// The full source being lexed.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Look ahead `n` tokens without consuming anything.
    pub fn peek(&mut self, n: usize) -> Option<&Token<'a>> {
        while self.lookahead.len() <= n {
            let Some(result) = self.lexer.next() else {
                break;
            };
            let span = self.lexer.span();
            // Logos error means unrecognized character - treat as TEXT
            let kind = result.map_or(SyntaxKind::TEXT, TokenKind::to_syntax_kind);
            self.lookahead.push_back(Token {
                kind,
                text: self.lexer.slice(),
                offset: self.base + span.start,
            });
        }
        self.lookahead.get(n)
    }

    /// Byte offset of the next unconsumed token (input length at the end).
    pub fn offset(&mut self) -> usize {
        let len = self.source.len();
        self.peek(0).map_or(len, |token| token.offset)
    }

    /// Restart lexing at `offset`, which must be a char boundary.
    pub fn seek(&mut self, offset: usize) {
        *self = Self::starting_at(self.source, offset);
    }

    /// Cut the next token down to its first `len` bytes, relabel it by what
    /// those bytes lex as, and resume lexing right after the cut.
    pub fn shorten_next(&mut self, len: usize) {
        let Some(next) = self.peek(0).cloned() else {
            return;
        };
        if len == 0 || len >= next.text.len() {
            return;
        }
        let text = &next.text[..len];
        let kind = TokenKind::lexer(text)
            .next()
            .and_then(Result::ok)
            .map_or(SyntaxKind::TEXT, TokenKind::to_syntax_kind);
        self.seek(next.offset + len);
        self.lookahead.push_front(Token {
            kind,
            text,
            offset: next.offset,
        });
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.peek(0);
        self.lookahead.pop_front()
    }
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    TokenStream::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(input: &str) -> Vec<(SyntaxKind, &str)> {
        lex(input).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_command_with_argument() {
        assert_eq!(
            kinds("\\section{Intro}"),
            vec![
                (SyntaxKind::COMMAND_NAME, "\\section"),
                (SyntaxKind::L_BRACE, "{"),
                (SyntaxKind::TEXT, "Intro"),
                (SyntaxKind::R_BRACE, "}"),
            ]
        );
    }

    #[test]
    fn lex_starred_command() {
        assert_eq!(
            kinds("\\section*{A}"),
            vec![
                (SyntaxKind::COMMAND_NAME, "\\section*"),
                (SyntaxKind::L_BRACE, "{"),
                (SyntaxKind::TEXT, "A"),
                (SyntaxKind::R_BRACE, "}"),
            ]
        );
    }

    #[rstest]
    #[case("\\%")]
    #[case("\\\\")]
    #[case("\\{")]
    #[case("\\_")]
    #[case("\\ ")]
    #[case("\\'")]
    fn lex_control_symbols(#[case] input: &str) {
        assert_eq!(kinds(input), vec![(SyntaxKind::ESCAPE, input)]);
    }

    #[rstest]
    #[case("\\(", SyntaxKind::INLINE_MATH_OPEN)]
    #[case("\\)", SyntaxKind::INLINE_MATH_CLOSE)]
    #[case("\\[", SyntaxKind::DISPLAY_MATH_OPEN)]
    #[case("\\]", SyntaxKind::DISPLAY_MATH_CLOSE)]
    #[case("$", SyntaxKind::DOLLAR)]
    #[case("$$", SyntaxKind::DOUBLE_DOLLAR)]
    fn lex_math_delimiters(#[case] input: &str, #[case] kind: SyntaxKind) {
        assert_eq!(kinds(input), vec![(kind, input)]);
    }

    #[test]
    fn line_break_escape_is_not_display_math() {
        assert_eq!(
            kinds("\\\\[2pt]"),
            vec![
                (SyntaxKind::ESCAPE, "\\\\"),
                (SyntaxKind::L_BRACKET, "["),
                (SyntaxKind::TEXT, "2pt"),
                (SyntaxKind::R_BRACKET, "]"),
            ]
        );
    }

    #[test]
    fn comment_stops_before_line_end() {
        assert_eq!(
            kinds("a % note\nb"),
            vec![
                (SyntaxKind::TEXT, "a"),
                (SyntaxKind::WHITESPACE, " "),
                (SyntaxKind::COMMENT, "% note"),
                (SyntaxKind::NEWLINE, "\n"),
                (SyntaxKind::TEXT, "b"),
            ]
        );
    }

    #[rstest]
    #[case("\n\n")]
    #[case("\r\n\r\n")]
    #[case("\n  \t\n\n")]
    fn blank_lines_are_paragraph_breaks(#[case] input: &str) {
        assert_eq!(kinds(input), vec![(SyntaxKind::PARBREAK, input)]);
    }

    #[test]
    fn indented_line_is_not_a_paragraph_break() {
        assert_eq!(
            kinds("\n  x"),
            vec![
                (SyntaxKind::NEWLINE, "\n"),
                (SyntaxKind::WHITESPACE, "  "),
                (SyntaxKind::TEXT, "x"),
            ]
        );
    }

    #[test]
    fn table_separators() {
        assert_eq!(
            kinds("a&b"),
            vec![
                (SyntaxKind::TEXT, "a"),
                (SyntaxKind::AMPERSAND, "&"),
                (SyntaxKind::TEXT, "b"),
            ]
        );
    }

    #[test]
    fn trailing_backslash_degrades_to_text() {
        assert_eq!(
            kinds("a\\"),
            vec![(SyntaxKind::TEXT, "a"), (SyntaxKind::TEXT, "\\")]
        );
    }

    #[test]
    fn offsets_match_source_slices() {
        let input = "caf\\'e $x^2$ % ü\n\\end{doc}";
        for token in lex(input) {
            assert_eq!(token.text, &input[token.offset..token.end()]);
        }
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "\\begin{itemize}\n  \\item a % c\n\n\\item[b] $x$ \\verb|y|\n\\end{itemize}";
        let reconstructed: String = lex(input).iter().map(|t| t.text).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn seek_restarts_lexing() {
        let input = "\\verb|%x| y";
        let mut stream = TokenStream::new(input);
        assert_eq!(stream.next().map(|t| t.text), Some("\\verb"));
        // `|%x|` would lex as TEXT + COMMENT; step over it instead
        assert_eq!(stream.peek(1).map(|t| t.kind), Some(SyntaxKind::COMMENT));
        stream.seek(9);
        assert_eq!(stream.offset(), 9);
        assert_eq!(
            stream.map(|t| t.text).collect::<Vec<_>>(),
            vec![" ", "y"]
        );
    }

    #[test]
    fn shorten_next_relabels_the_prefix() {
        let mut stream = TokenStream::new("$$x");
        stream.shorten_next(1);
        let tokens: Vec<_> = stream.map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::DOLLAR, "$"),
                (SyntaxKind::DOLLAR, "$"),
                (SyntaxKind::TEXT, "x"),
            ]
        );
    }

    #[test]
    fn shorten_next_splits_a_comment() {
        let input = "% a $ b\n";
        let mut stream = TokenStream::new(input);
        stream.shorten_next(4);
        let tokens: Vec<_> = stream.map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            tokens,
            vec![
                (SyntaxKind::COMMENT, "% a "),
                (SyntaxKind::DOLLAR, "$"),
                (SyntaxKind::WHITESPACE, " "),
                (SyntaxKind::TEXT, "b"),
                (SyntaxKind::NEWLINE, "\n"),
            ]
        );
    }
}
