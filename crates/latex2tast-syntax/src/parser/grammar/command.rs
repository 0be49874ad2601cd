//! Commands, control symbols and the commands whose arguments are literal.

use super::{Ctx, ParseResult, environment, group, option};
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the command at the current `COMMAND_NAME` token.
pub(super) fn command<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    match p.current_text() {
        "\\begin" => environment::environment(p, ctx),
        "\\end" => Err(stray_end(p, ctx)),
        "\\verb" | "\\verb*" => verb(p),
        "\\url" | "\\href" => with_arguments(p, ctx, true),
        _ => with_arguments(p, ctx, false),
    }
}

fn with_arguments<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>, literal_first: bool) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = arguments(p, ctx, literal_first);
    m.complete(p, SyntaxKind::COMMAND);
    result
}

/// Attach every `[..]` / `{..}` that follows without intervening whitespace.
///
/// With `literal_first`, the first mandatory argument is captured verbatim.
pub(super) fn arguments<'i>(
    p: &mut Parser<'i>,
    ctx: Ctx<'i>,
    mut literal_first: bool,
) -> ParseResult {
    loop {
        match p.current() {
            SyntaxKind::L_BRACKET => option(p, ctx)?,
            SyntaxKind::L_BRACE if literal_first => {
                literal_group(p)?;
                literal_first = false;
            }
            SyntaxKind::L_BRACE => group(p, ctx)?,
            _ => return Ok(()),
        }
    }
}

/// `\\` may carry an optional length, other control symbols take nothing.
pub(super) fn control_symbol<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    if p.current_text() != "\\\\" {
        p.bump();
        return Ok(());
    }
    let m = p.start();
    p.bump();
    let result = if p.at(SyntaxKind::L_BRACKET) {
        option(p, ctx)
    } else {
        Ok(())
    };
    m.complete(p, SyntaxKind::COMMAND);
    result
}

fn stray_end(p: &mut Parser<'_>, ctx: Ctx<'_>) -> SyntaxError {
    let construct = if p.nth(1) == SyntaxKind::L_BRACE
        && p.nth(2) == SyntaxKind::TEXT
        && p.nth(3) == SyntaxKind::R_BRACE
    {
        format!("\\end{{{}}}", p.nth_text(2))
    } else {
        "\\end".to_string()
    };
    p.error(format!("unexpected `{construct}`, expected {}", ctx.closer))
}

fn verb(p: &mut Parser<'_>) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = verb_payload(p);
    m.complete(p, SyntaxKind::VERB);
    result
}

/// `|...|` after `\verb`: any delimiter, closed on the same line.
fn verb_payload(p: &mut Parser<'_>) -> ParseResult {
    let start = p.offset();
    let mut chars = p.source()[start..].char_indices();
    let delimiter = match chars.next() {
        Some((_, c)) if !c.is_alphabetic() && !c.is_whitespace() && c != '*' => c,
        _ => return Err(p.error_at(start, "expected a delimiter after `\\verb`")),
    };
    for (i, c) in chars {
        if c == delimiter {
            p.bump_literal(start + i + c.len_utf8(), SyntaxKind::VERBATIM_TEXT);
            return Ok(());
        }
        if c == '\n' {
            break;
        }
    }
    Err(p.error_at(
        start,
        format!("unterminated `\\verb`, expected `{delimiter}`"),
    ))
}

/// `{...}` whose content is taken literally, balancing nested braces.
fn literal_group(p: &mut Parser<'_>) -> ParseResult {
    let m = p.start();
    let open = p.offset();
    p.bump();
    let result = match matching_brace(p.source(), open) {
        Some(close) => {
            p.bump_literal(close, SyntaxKind::VERBATIM_TEXT);
            p.bump();
            Ok(())
        }
        None => Err(p.error_at(open, "unterminated argument, expected `}`")),
    };
    m.complete(p, SyntaxKind::GROUP);
    result
}

/// Offset of the `}` closing the `{` at `open`. Backslash escapes the next
/// character.
fn matching_brace(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut chars = source[open..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{abc}", Some(4))]
    #[case("{a{b}c}", Some(6))]
    #[case("{a\\}b}", Some(5))]
    #[case("{a%b}", Some(4))]
    #[case("{ab", None)]
    fn finds_matching_brace(#[case] source: &str, #[case] expected: Option<usize>) {
        assert_eq!(matching_brace(source, 0), expected);
    }
}
