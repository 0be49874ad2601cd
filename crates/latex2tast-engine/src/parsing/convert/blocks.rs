//! Environments.

use std::mem;

use latex2tast_syntax::ast::{Command, Environment, Item};
use latex2tast_syntax::{SyntaxElement, SyntaxKind, SyntaxNode};

use super::tables::{self, EnvironmentKind};
use super::{Converter, Flow, WarningKind};
use crate::parsing::node::{LeafKind, Node, ParentKind};
use crate::parsing::paragraph;
use crate::parsing::span::Span;

impl<'s> Converter<'_, 's> {
    pub(super) fn environment(&mut self, node: &SyntaxNode, span: Span, out: &mut Vec<Flow<'s>>) {
        let Some(env) = Environment::cast(node.clone()) else {
            return;
        };
        let name = env.name();
        let Some(kind) = tables::environment_kind(&name) else {
            self.warn(WarningKind::Environment, name, span);
            let children = self.blocks(env.content());
            out.push(Flow::Block(self.parent(ParentKind::Html, span, children)));
            return;
        };
        let block = match kind {
            EnvironmentKind::List => self.list(&env, span, name == "description"),
            EnvironmentKind::Table => self.table(&env, span),
            EnvironmentKind::Quote => {
                let children = self.blocks(env.content());
                self.parent(ParentKind::BlockQuote, span, children)
            }
            EnvironmentKind::Verbatim => {
                let value = env
                    .content()
                    .filter_map(SyntaxElement::into_token)
                    .filter(|t| t.kind() == SyntaxKind::VERBATIM_TEXT)
                    .map(|t| t.text().to_string())
                    .collect();
                self.leaf(LeafKind::CodeBlock { value }, span)
            }
            EnvironmentKind::Math => {
                let value = self.source.slice(span).to_string();
                self.leaf(LeafKind::CodeBlock { value }, span)
            }
            EnvironmentKind::Figure => {
                let nodes = self.inline_nodes(env.content());
                let children = paragraph::merge_text(self.source, paragraph::trim(nodes));
                self.parent(ParentKind::Paragraph, span, children)
            }
            EnvironmentKind::Transparent => {
                for block in self.blocks(env.content()) {
                    out.push(Flow::Block(block));
                }
                return;
            }
        };
        out.push(Flow::Block(block));
    }

    fn list(&mut self, env: &Environment, span: Span, description: bool) -> Node<'s> {
        let children = env
            .items()
            .map(|item| self.list_item(&item, description))
            .collect();
        self.parent(ParentKind::List, span, children)
    }

    /// From `\item` to the end of its last child.
    fn list_item(&mut self, item: &Item, description: bool) -> Node<'s> {
        let mut children = Vec::new();
        let label = item.label();
        if description && let Some(label) = &label {
            let nodes = self.inline_nodes(label.content());
            let nodes = paragraph::merge_text(self.source, paragraph::trim(nodes));
            if let Some(span) = Self::covering(&nodes) {
                children.push(self.parent(ParentKind::Paragraph, span, nodes));
            }
        }
        children.extend(self.blocks(item.content()));

        let start = self.source.span_of_node(item.syntax());
        let head = match (&label, item.syntax().first_token()) {
            (Some(label), _) => self.source.span_of_node(label.syntax()),
            (None, Some(token)) => {
                let range = token.text_range();
                self.source.span(range.start().into(), range.end().into())
            }
            (None, None) => start,
        };
        let end = children.last().map_or(head, Node::span);
        let span = self.source.span(start.start, end.end.max(head.end));
        self.parent(ParentKind::ListItem, span, children)
    }

    /// Rows split at `\\`, cells at `&`.
    fn table(&mut self, env: &Environment, span: Span) -> Node<'s> {
        let mut rows: Vec<Vec<Vec<SyntaxElement>>> = Vec::new();
        let mut cells: Vec<Vec<SyntaxElement>> = vec![Vec::new()];
        for element in env.content() {
            let command = element.as_node().cloned().and_then(Command::cast);
            match command.map(|c| c.name()) {
                Some(name) if tables::is_row_break(&name) => {
                    rows.push(mem::replace(&mut cells, vec![Vec::new()]));
                    continue;
                }
                Some(name) if tables::is_table_rule(&name) => continue,
                _ => {}
            }
            if element.kind() == SyntaxKind::AMPERSAND {
                cells.push(Vec::new());
            } else if let Some(cell) = cells.last_mut() {
                cell.push(element);
            }
        }
        rows.push(cells);

        let children = rows
            .into_iter()
            .filter_map(|cells| self.table_row(cells))
            .collect();
        self.parent(ParentKind::Table, span, children)
    }

    fn table_row(&mut self, cells: Vec<Vec<SyntaxElement>>) -> Option<Node<'s>> {
        let cells: Vec<_> = cells
            .into_iter()
            .filter_map(|cell| self.table_cell(cell))
            .collect();
        let span = Self::covering(&cells)?;
        Some(self.parent(ParentKind::TableRow, span, cells))
    }

    fn table_cell(&mut self, elements: Vec<SyntaxElement>) -> Option<Node<'s>> {
        let nodes = self.inline_nodes(elements);
        let children = paragraph::merge_text(self.source, paragraph::trim(nodes));
        let span = Self::covering(&children)?;
        Some(self.parent(ParentKind::TableCell, span, children))
    }
}
