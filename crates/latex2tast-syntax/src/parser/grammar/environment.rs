//! `\begin{name} ... \end{name}`.
//!
//! The name captured at `\begin` travels down as `Closer::End(name)`; the
//! body stops at the first `\end` it meets, which must carry the same name.

use super::{
    Closer, Ctx, ParseResult, at_closer, command, element, group, option, sequence, unexpected_end,
};
use crate::environments;
use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

pub(super) fn environment<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    let result = environment_parts(p, ctx);
    m.complete(p, SyntaxKind::ENVIRONMENT);
    result
}

fn environment_parts<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let name = delimiter(p, SyntaxKind::BEGIN)?;
    let closer = Closer::End(name);
    if environments::is_verbatim(name) {
        verbatim_arguments(p, ctx, name)?;
        verbatim_body(p, name)?;
    } else if environments::is_math(name) {
        command::arguments(p, ctx, false)?;
        body(p, Ctx::math(closer))?;
    } else if environments::is_list(name) {
        command::arguments(p, ctx, false)?;
        list_body(p, ctx.nested(closer))?;
    } else {
        command::arguments(p, ctx, false)?;
        body(p, ctx.nested(closer))?;
    }
    end(p, name)
}

/// `\begin{name}` or `\end{name}`, returning the name.
fn delimiter<'i>(p: &mut Parser<'i>, kind: SyntaxKind) -> Result<&'i str, SyntaxError> {
    let m = p.start();
    p.bump();
    let result = environment_name(p);
    m.complete(p, kind);
    result
}

fn environment_name<'i>(p: &mut Parser<'i>) -> Result<&'i str, SyntaxError> {
    if !p.eat(SyntaxKind::L_BRACE) {
        return Err(p.error("expected `{` and an environment name"));
    }
    if !p.at(SyntaxKind::TEXT) {
        return Err(p.error("expected an environment name"));
    }
    let name = p.current_text();
    p.bump();
    if !p.eat(SyntaxKind::R_BRACE) {
        return Err(p.error("expected `}` after the environment name"));
    }
    Ok(name)
}

fn end(p: &mut Parser<'_>, expected: &str) -> ParseResult {
    let offset = p.offset();
    let found = delimiter(p, SyntaxKind::END)?;
    if found == expected {
        Ok(())
    } else {
        Err(p.error_at(
            offset,
            format!(
                "mismatched environment: expected `\\end{{{expected}}}`, found `\\end{{{found}}}`"
            ),
        ))
    }
}

fn body<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    let result = sequence(p, ctx);
    m.complete(p, SyntaxKind::ENV_BODY);
    result
}

/// `minted` takes `[options]{language}`, `lstlisting` takes `[options]`.
fn verbatim_arguments<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>, name: &str) -> ParseResult {
    if matches!(name, "minted" | "lstlisting") && p.at(SyntaxKind::L_BRACKET) {
        option(p, ctx)?;
    }
    if name == "minted" && p.at(SyntaxKind::L_BRACE) {
        group(p, ctx)?;
    }
    Ok(())
}

fn verbatim_body(p: &mut Parser<'_>, name: &str) -> ParseResult {
    let m = p.start();
    let start = p.offset();
    let closer = Closer::End(name).literal();
    let result = match p.source()[start..].find(closer.as_str()) {
        Some(len) => {
            p.bump_literal(start + len, SyntaxKind::VERBATIM_TEXT);
            Ok(())
        }
        None => Err(p.error_at(
            start,
            format!("unterminated verbatim environment, expected `{closer}`"),
        )),
    };
    m.complete(p, SyntaxKind::ENV_BODY);
    result
}

fn list_body<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    let result = list_items(p, ctx);
    m.complete(p, SyntaxKind::ENV_BODY);
    result
}

/// Content before the first `\item` stays directly in the body.
fn list_items<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    loop {
        if at_closer(p, ctx.closer) {
            return Ok(());
        }
        if p.at_end() {
            return Err(unexpected_end(p, ctx.closer));
        }
        if p.at_command("\\item") {
            item(p, ctx)?;
        } else {
            element(p, ctx)?;
        }
    }
}

fn item<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    let m = p.start();
    p.bump();
    let result = item_parts(p, ctx);
    m.complete(p, SyntaxKind::ITEM);
    result
}

fn item_parts<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    if p.at(SyntaxKind::L_BRACKET) {
        option(p, ctx)?;
    }
    let m = p.start();
    let result = item_content(p, ctx);
    m.complete(p, SyntaxKind::ITEM_BODY);
    result
}

fn item_content<'i>(p: &mut Parser<'i>, ctx: Ctx<'i>) -> ParseResult {
    while !at_closer(p, ctx.closer) && !p.at_command("\\item") {
        if p.at_end() {
            return Err(unexpected_end(p, ctx.closer));
        }
        element(p, ctx)?;
    }
    Ok(())
}
