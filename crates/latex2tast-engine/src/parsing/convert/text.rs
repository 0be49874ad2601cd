//! Plain-text extraction from syntax elements.

use latex2tast_syntax::ast::{Command, Group};
use latex2tast_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};

use super::tables;

/// Prose produced by a control symbol such as `\%` or `\'`.
pub fn escape(text: &str) -> String {
    let Some(symbol) = text.strip_prefix('\\').and_then(|rest| rest.chars().next()) else {
        return text.to_string();
    };
    match symbol {
        // accents and spacing adjustments
        '\'' | '`' | '^' | '"' | '~' | '=' | '.' | '-' | '/' | '!' => String::new(),
        ',' | ';' | ':' | ' ' | '\t' | '\n' | '\r' => " ".to_string(),
        c => c.to_string(),
    }
}

/// Text of a command's last own argument, with nested commands reduced the
/// same way.
pub fn argument_text(command: &Command) -> String {
    let (arguments, _) = command.split_arguments(tables::arity(&command.name()));
    arguments.last().map(group_text).unwrap_or_default()
}

pub fn group_text(group: &Group) -> String {
    group.content().map(|e| element_text(&e)).collect()
}

fn element_text(element: &SyntaxElement) -> String {
    match element {
        SyntaxElement::Token(token) => match token.kind() {
            SyntaxKind::TEXT
            | SyntaxKind::WHITESPACE
            | SyntaxKind::NEWLINE
            | SyntaxKind::VERBATIM_TEXT => token.text().to_string(),
            SyntaxKind::ESCAPE => escape(token.text()),
            _ => String::new(),
        },
        SyntaxElement::Node(node) => node_text(node),
    }
}

fn node_text(node: &SyntaxNode) -> String {
    if let Some(command) = Command::cast(node.clone()) {
        let (arguments, rest) = command.split_arguments(tables::arity(&command.name()));
        let mut text = arguments.last().map(group_text).unwrap_or_default();
        text.extend(rest.iter().map(group_text));
        return text;
    }
    match Group::cast(node.clone()) {
        Some(group) if node.kind() == SyntaxKind::GROUP => group_text(&group),
        _ => String::new(),
    }
}
