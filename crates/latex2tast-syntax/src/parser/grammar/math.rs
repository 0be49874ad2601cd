//! Math regions. Their content is parsed like any other sequence; only the
//! comment handling differs (see [`Ctx`]).

use super::{Closer, Ctx, ParseResult, delimited};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// `$...$` or `\(...\)`.
pub(super) fn inline(p: &mut Parser<'_>) -> ParseResult {
    let closer = if p.at(SyntaxKind::DOLLAR) {
        Closer::Dollar
    } else {
        Closer::InlineMath
    };
    region(p, closer, SyntaxKind::INLINE_MATH)
}

/// `$$...$$` or `\[...\]`.
pub(super) fn display(p: &mut Parser<'_>) -> ParseResult {
    let closer = if p.at(SyntaxKind::DOUBLE_DOLLAR) {
        Closer::DoubleDollar
    } else {
        Closer::DisplayMath
    };
    region(p, closer, SyntaxKind::DISPLAY_MATH)
}

fn region<'i>(p: &mut Parser<'i>, closer: Closer<'i>, kind: SyntaxKind) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = delimited(p, Ctx::math(closer));
    m.complete(p, kind);
    result
}
