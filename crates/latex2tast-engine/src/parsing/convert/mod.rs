//! # Convert
//!
//! Maps the concrete syntax tree to document tree nodes.
//!
//! Every element converts into zero or more [`Flow`] items. Inline items are
//! later grouped into paragraphs by [`paragraph::segment`]; block items close
//! the running paragraph. Conversion never fails: unknown macros and
//! environments degrade to `Html` nodes and are reported as [`Warning`]s.
//!
//! Comments are skipped here. They are threaded back into the finished tree
//! by [`crate::parsing::comments`], and whitespace that no node claims is
//! covered by [`crate::parsing::gaps`].
//!
//! ## Module Structure
//!
//! - [`tables`] - macro and environment name tables
//! - [`text`] - escapes and plain-text extraction
//! - `blocks` - environments: lists, tables, quotes, code, figures

mod blocks;
pub mod tables;
pub mod text;

use std::fmt;

use latex2tast_syntax::ast::{Command, Group, Verb};
use latex2tast_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use rowan::NodeOrToken;

use super::node::{LeafKind, Node, ParentKind};
use super::normalize::TopLevel;
use super::paragraph;
use super::source::Source;
use super::span::Span;
use tables::{MacroKind, Style};

/// One converted element, before paragraph segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<'s> {
    Block(Node<'s>),
    Inline(Node<'s>),
    /// A blank line: ends the running paragraph.
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    Macro,
    Environment,
}

/// A macro or environment without a known classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub name: String,
    pub span: Span,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (what, prefix) = match self.kind {
            WarningKind::Macro => ("macro", "\\"),
            WarningKind::Environment => ("environment", ""),
        };
        write!(
            f,
            "{}:{}: unknown {what} `{prefix}{}`",
            self.span.start_pos.line, self.span.start_pos.column, self.name
        )
    }
}

pub struct Converter<'a, 's> {
    source: &'a Source<'s>,
    warnings: Vec<Warning>,
}

impl<'a, 's> Converter<'a, 's> {
    pub fn new(source: &'a Source<'s>) -> Self {
        Self {
            source,
            warnings: Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<Warning> {
        self.warnings
    }

    /// Convert the unwrapped top-level sequence into the document's blocks.
    pub fn document(&mut self, top: Vec<TopLevel>) -> Vec<Node<'s>> {
        let mut flow = Vec::new();
        for item in top {
            match item {
                TopLevel::Markup(element) => self.markup(element, &mut flow),
                TopLevel::Content(element) => self.element(element, &mut flow),
            }
        }
        paragraph::segment(self.source, flow)
    }

    /// Block sequence: paragraphs and blocks.
    pub fn blocks(&mut self, elements: impl IntoIterator<Item = SyntaxElement>) -> Vec<Node<'s>> {
        let mut flow = Vec::new();
        for element in elements {
            self.element(element, &mut flow);
        }
        paragraph::segment(self.source, flow)
    }

    /// Inline sequence with contiguous text merged.
    pub fn inline(&mut self, elements: impl IntoIterator<Item = SyntaxElement>) -> Vec<Node<'s>> {
        let nodes = self.inline_nodes(elements);
        paragraph::merge_text(self.source, nodes)
    }

    /// Inline sequence, one `Str` per token. Blank lines are dropped and
    /// blocks are kept in place.
    fn inline_nodes(&mut self, elements: impl IntoIterator<Item = SyntaxElement>) -> Vec<Node<'s>> {
        let mut flow = Vec::new();
        for element in elements {
            self.element(element, &mut flow);
        }
        flow.into_iter()
            .filter_map(|item| match item {
                Flow::Block(node) | Flow::Inline(node) => Some(node),
                Flow::Break => None,
            })
            .collect()
    }

    /// Preamble and postamble: every construct is opaque markup.
    fn markup(&mut self, element: SyntaxElement, out: &mut Vec<Flow<'s>>) {
        if element.kind().is_trivia() {
            return;
        }
        let span = self.source.span_of(&element);
        let value = match element.as_node().cloned().and_then(Command::cast) {
            Some(command) => text::argument_text(&command),
            None => self.source.slice(span).to_string(),
        };
        out.push(Flow::Block(self.leaf(LeafKind::Html { value }, span)));
    }

    fn element(&mut self, element: SyntaxElement, out: &mut Vec<Flow<'s>>) {
        match element {
            NodeOrToken::Token(token) => self.token(&token, out),
            NodeOrToken::Node(node) => self.node(&node, out),
        }
    }

    fn token(&mut self, token: &SyntaxToken, out: &mut Vec<Flow<'s>>) {
        let range = token.text_range();
        let span = self.source.span(range.start().into(), range.end().into());
        let value = match token.kind() {
            SyntaxKind::COMMENT => return,
            SyntaxKind::PARBREAK => {
                out.push(Flow::Break);
                return;
            }
            SyntaxKind::ESCAPE => text::escape(token.text()),
            _ => token.text().to_string(),
        };
        out.push(Flow::Inline(self.leaf(LeafKind::Str { value }, span)));
    }

    fn node(&mut self, node: &SyntaxNode, out: &mut Vec<Flow<'s>>) {
        let span = self.source.span_of_node(node);
        match node.kind() {
            SyntaxKind::COMMAND => {
                if let Some(command) = Command::cast(node.clone()) {
                    self.command(&command, out);
                }
            }
            SyntaxKind::ENVIRONMENT => self.environment(node, span, out),
            SyntaxKind::INLINE_MATH => {
                let value = self.source.slice(span).to_string();
                out.push(Flow::Inline(self.leaf(LeafKind::Code { value }, span)));
            }
            SyntaxKind::DISPLAY_MATH => {
                let value = self.source.slice(span).to_string();
                out.push(Flow::Block(self.leaf(LeafKind::CodeBlock { value }, span)));
            }
            SyntaxKind::VERB => {
                let value = Verb::cast(node.clone())
                    .map(|verb| verb.payload())
                    .unwrap_or_default();
                out.push(Flow::Inline(self.leaf(LeafKind::Code { value }, span)));
            }
            SyntaxKind::GROUP | SyntaxKind::OPTION => {
                if let Some(group) = Group::cast(node.clone()) {
                    for element in group.content() {
                        self.element(element, out);
                    }
                }
            }
            _ => {
                for element in node.children_with_tokens() {
                    self.element(element, out);
                }
            }
        }
    }

    /// A macro with the arguments it takes. Braced groups after those are
    /// converted as ordinary content.
    fn command(&mut self, command: &Command, out: &mut Vec<Flow<'s>>) {
        let name = command.name();
        let (arguments, rest) = command.split_arguments(tables::arity(&name));
        let span = self.command_span(command, &arguments);
        let content = arguments.iter().rev().find(|group| !group.is_optional());
        let value = arguments.last().map(text::group_text).unwrap_or_default();
        let item = match tables::macro_kind(&name) {
            None => {
                self.warn(WarningKind::Macro, name, span);
                Some(Flow::Inline(self.leaf(LeafKind::Html { value }, span)))
            }
            Some(MacroKind::Header(depth)) => {
                let children = self.content(content);
                let header = self.parent(ParentKind::Header { depth }, span, children);
                Some(Flow::Block(header))
            }
            Some(MacroKind::Style(style)) => {
                let kind = match style {
                    Style::Emphasis => ParentKind::Emphasis,
                    Style::Strong => ParentKind::Strong,
                    Style::Delete => ParentKind::Delete,
                };
                let children = self.content(content);
                Some(Flow::Inline(self.parent(kind, span, children)))
            }
            Some(MacroKind::Code) => Some(Flow::Inline(self.leaf(LeafKind::Code { value }, span))),
            Some(MacroKind::Transparent) => {
                if let Some(group) = content {
                    for element in group.content() {
                        self.element(element, out);
                    }
                }
                None
            }
            Some(MacroKind::Break) => Some(Flow::Inline(self.leaf(LeafKind::Break, span))),
            Some(MacroKind::Url | MacroKind::Href) => {
                Some(Flow::Inline(self.link(&arguments, span)))
            }
            Some(MacroKind::Image) => {
                let title = value.clone();
                let image = LeafKind::Image { url: value, title };
                Some(Flow::Inline(self.leaf(image, span)))
            }
            Some(MacroKind::Block) => Some(Flow::Block(self.leaf(LeafKind::Html { value }, span))),
            Some(MacroKind::Markup) => {
                Some(Flow::Inline(self.leaf(LeafKind::Html { value }, span)))
            }
        };
        out.extend(item);
        for group in rest {
            self.node(group.syntax(), out);
        }
    }

    /// From the macro name to the end of its last own argument.
    fn command_span(&self, command: &Command, arguments: &[Group]) -> Span {
        let range = command.syntax().text_range();
        let end = arguments
            .last()
            .map(|group| group.syntax().text_range().end())
            .or_else(|| command.name_token().map(|token| token.text_range().end()))
            .unwrap_or(range.end());
        self.source.span(range.start().into(), end.into())
    }

    fn content(&mut self, group: Option<&Group>) -> Vec<Node<'s>> {
        match group {
            Some(group) => self.inline(group.content()),
            None => Vec::new(),
        }
    }

    /// `\url{u}` and `\href{u}{text}`. The first argument is literal.
    fn link(&mut self, arguments: &[Group], span: Span) -> Node<'s> {
        let mut groups = arguments.iter().filter(|group| !group.is_optional());
        let Some(target) = groups.next() else {
            return self.leaf(LeafKind::Html { value: String::new() }, span);
        };
        let url = target.literal_text();
        let children = match groups.next() {
            Some(text) => self.inline(text.content()),
            None => self.literal_text(target),
        };
        self.parent(ParentKind::Link { url }, span, children)
    }

    /// A single `Str` over the content of a literal group.
    fn literal_text(&self, group: &Group) -> Vec<Node<'s>> {
        let content: Vec<_> = group.content().collect();
        let (Some(first), Some(last)) = (content.first(), content.last()) else {
            return Vec::new();
        };
        let span = self.source.span_of(first).cover(self.source.span_of(last));
        let value = self.source.slice(span).to_string();
        vec![self.leaf(LeafKind::Str { value }, span)]
    }

    fn warn(&mut self, kind: WarningKind, name: String, span: Span) {
        let warning = Warning { kind, name, span };
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    fn leaf(&self, kind: LeafKind, span: Span) -> Node<'s> {
        Node::leaf(kind, span, self.source.slice(span))
    }

    fn parent(&self, kind: ParentKind, span: Span, children: Vec<Node<'s>>) -> Node<'s> {
        Node::parent(kind, span, self.source.slice(span), children)
    }

    /// Span from the first to the last node.
    fn covering(nodes: &[Node<'s>]) -> Option<Span> {
        let first = nodes.first()?.span();
        let last = nodes.last()?.span();
        Some(first.cover(last))
    }
}

#[cfg(test)]
mod tests;
