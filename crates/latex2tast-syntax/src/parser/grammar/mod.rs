//! # Grammar Rules
//!
//! Recursive descent over LaTeX constructs. Every rule takes the [`Ctx`] of
//! the sequence it appears in, which carries:
//!
//! - the [`Closer`] that ends the current sequence. Environments pass
//!   `Closer::End(name)` down, so `\end{x}` is checked against the name
//!   captured at `\begin{x}` without any shared state.
//! - the enclosing math region, if any. Inside math the region's closing
//!   delimiter wins over a comment that would otherwise swallow it.
//!
//! ## Module Structure
//!
//! - [`command`] - commands, control symbols, `\verb`, literal URL arguments
//! - [`environment`] - `\begin`/`\end`, lists, verbatim bodies
//! - [`math`] - `$`, `$$`, `\(`, `\[` regions

mod command;
mod environment;
mod math;

use std::fmt;

use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

type ParseResult = Result<(), SyntaxError>;

/// What ends the sequence currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closer<'i> {
    Eof,
    Brace,
    Bracket,
    Dollar,
    DoubleDollar,
    InlineMath,
    DisplayMath,
    End(&'i str),
}

impl Closer<'_> {
    /// Source text of the closing delimiter.
    fn literal(self) -> String {
        match self {
            Closer::Eof => String::new(),
            Closer::Brace => "}".into(),
            Closer::Bracket => "]".into(),
            Closer::Dollar => "$".into(),
            Closer::DoubleDollar => "$$".into(),
            Closer::InlineMath => "\\)".into(),
            Closer::DisplayMath => "\\]".into(),
            Closer::End(name) => format!("\\end{{{name}}}"),
        }
    }
}

impl fmt::Display for Closer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Closer::Eof => f.write_str("end of input"),
            closer => write!(f, "`{}`", closer.literal()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Ctx<'i> {
    closer: Closer<'i>,
    math: Option<Closer<'i>>,
}

impl<'i> Ctx<'i> {
    fn text(closer: Closer<'i>) -> Self {
        Self { closer, math: None }
    }

    fn math(closer: Closer<'i>) -> Self {
        Self {
            closer,
            math: Some(closer),
        }
    }

    /// Same region, different closer.
    fn nested(self, closer: Closer<'i>) -> Self {
        Self { closer, ..self }
    }
}

/// Parse the root node.
pub(crate) fn root(p: &mut Parser<'_>) -> ParseResult {
    let m = p.start();
    let result = sequence(p, Ctx::text(Closer::Eof));
    m.complete(p, SyntaxKind::ROOT);
    result
}

/// Parse elements until the closer of `ctx`, leaving the closer unconsumed.
fn sequence<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    loop {
        if at_closer(p, ctx.closer) {
            return Ok(());
        }
        if p.at_end() {
            return Err(unexpected_end(p, ctx.closer));
        }
        element(p, ctx)?;
    }
}

/// Parse a sequence and consume its closer.
fn delimited<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    sequence(p, ctx)?;
    p.bump();
    Ok(())
}

fn at_closer(p: &mut Parser<'_>, closer: Closer<'_>) -> bool {
    match closer {
        Closer::Eof => p.at_end(),
        Closer::Brace => p.at(SyntaxKind::R_BRACE),
        Closer::Bracket => p.at(SyntaxKind::R_BRACKET),
        Closer::Dollar => {
            // `$a$$b$` is two inline formulas
            if p.at(SyntaxKind::DOUBLE_DOLLAR) {
                p.split_current(1);
            }
            p.at(SyntaxKind::DOLLAR)
        }
        Closer::DoubleDollar => p.at(SyntaxKind::DOUBLE_DOLLAR),
        Closer::InlineMath => p.at(SyntaxKind::INLINE_MATH_CLOSE),
        Closer::DisplayMath => p.at(SyntaxKind::DISPLAY_MATH_CLOSE),
        Closer::End(_) => p.at_command("\\end"),
    }
}

fn unexpected_end(p: &mut Parser<'_>, closer: Closer<'_>) -> SyntaxError {
    p.error(format!("unexpected end of input, expected {closer}"))
}

fn element<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    match p.current() {
        SyntaxKind::COMMENT => {
            comment(p, ctx);
            Ok(())
        }
        SyntaxKind::L_BRACE => group(p, ctx),
        SyntaxKind::COMMAND_NAME => command::command(p, ctx),
        SyntaxKind::ESCAPE => command::control_symbol(p, ctx),
        SyntaxKind::DOLLAR | SyntaxKind::INLINE_MATH_OPEN => math::inline(p),
        SyntaxKind::DOUBLE_DOLLAR | SyntaxKind::DISPLAY_MATH_OPEN => math::display(p),
        SyntaxKind::R_BRACE | SyntaxKind::INLINE_MATH_CLOSE | SyntaxKind::DISPLAY_MATH_CLOSE => {
            let text = p.current_text();
            Err(p.error(format!("unexpected `{text}`, expected {}", ctx.closer)))
        }
        _ => {
            p.bump();
            Ok(())
        }
    }
}

/// Inside math, a comment ends where the region's closer starts.
fn comment(p: &mut Parser<'_>, ctx: Ctx<'_>) {
    if let Some(region) = ctx.math
        && let Some(cut) = p.current_text().find(region.literal().as_str())
    {
        p.split_current(cut);
    }
    p.bump();
}

pub(crate) fn group<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = delimited(p, ctx.nested(Closer::Brace));
    m.complete(p, SyntaxKind::GROUP);
    result
}

pub(crate) fn option<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = delimited(p, ctx.nested(Closer::Bracket));
    m.complete(p, SyntaxKind::OPTION);
    result
}
