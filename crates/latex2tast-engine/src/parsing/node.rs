//! The document tree handed to prose linters.
//!
//! Leaves and containers are distinct types, so code that descends into
//! children matches on [`Node`] instead of probing for a children field.

use serde::Serialize;

use super::span::Span;

/// Kinds without children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum LeafKind {
    Str { value: String },
    Code { value: String },
    CodeBlock { value: String },
    Comment { value: String },
    Break,
    Image { url: String, title: String },
    /// Markup without prose meaning.
    Html { value: String },
}

/// Kinds with an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ParentKind {
    Document,
    Paragraph,
    Header { depth: u8 },
    Emphasis,
    Strong,
    Delete,
    Link { url: String },
    List,
    ListItem,
    Table,
    TableRow,
    TableCell,
    BlockQuote,
    /// Unknown environment whose body was still converted.
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf<'s> {
    #[serde(flatten)]
    pub kind: LeafKind,
    #[serde(flatten)]
    pub span: Span,
    pub raw: &'s str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent<'s> {
    #[serde(flatten)]
    pub kind: ParentKind,
    #[serde(flatten)]
    pub span: Span,
    pub raw: &'s str,
    pub children: Vec<Node<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node<'s> {
    Leaf(Leaf<'s>),
    Parent(Parent<'s>),
}

impl<'s> Node<'s> {
    pub fn leaf(kind: LeafKind, span: Span, raw: &'s str) -> Self {
        Node::Leaf(Leaf { kind, span, raw })
    }

    pub fn parent(kind: ParentKind, span: Span, raw: &'s str, children: Vec<Node<'s>>) -> Self {
        Node::Parent(Parent {
            kind,
            span,
            raw,
            children,
        })
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Leaf(leaf) => leaf.span,
            Node::Parent(parent) => parent.span,
        }
    }

    pub fn raw(&self) -> &'s str {
        match self {
            Node::Leaf(leaf) => leaf.raw,
            Node::Parent(parent) => parent.raw,
        }
    }

    /// Children of a container, empty for a leaf.
    pub fn children(&self) -> &[Node<'s>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => &parent.children,
        }
    }

    /// The `type` name used in serialised trees.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Leaf(leaf) => match leaf.kind {
                LeafKind::Str { .. } => "Str",
                LeafKind::Code { .. } => "Code",
                LeafKind::CodeBlock { .. } => "CodeBlock",
                LeafKind::Comment { .. } => "Comment",
                LeafKind::Break => "Break",
                LeafKind::Image { .. } => "Image",
                LeafKind::Html { .. } => "Html",
            },
            Node::Parent(parent) => match parent.kind {
                ParentKind::Document => "Document",
                ParentKind::Paragraph => "Paragraph",
                ParentKind::Header { .. } => "Header",
                ParentKind::Emphasis => "Emphasis",
                ParentKind::Strong => "Strong",
                ParentKind::Delete => "Delete",
                ParentKind::Link { .. } => "Link",
                ParentKind::List => "List",
                ParentKind::ListItem => "ListItem",
                ParentKind::Table => "Table",
                ParentKind::TableRow => "TableRow",
                ParentKind::TableCell => "TableCell",
                ParentKind::BlockQuote => "BlockQuote",
                ParentKind::Html => "Html",
            },
        }
    }

    /// `value` of a leaf that carries one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(Leaf {
                kind:
                    LeafKind::Str { value }
                    | LeafKind::Code { value }
                    | LeafKind::CodeBlock { value }
                    | LeafKind::Comment { value }
                    | LeafKind::Html { value },
                ..
            }) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_str(&self) -> bool {
        matches!(
            self,
            Node::Leaf(Leaf {
                kind: LeafKind::Str { .. },
                ..
            })
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Node::Leaf(Leaf {
                kind: LeafKind::Comment { .. },
                ..
            })
        )
    }

    /// Pre-order iterator over this node and all its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Node<'s>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }
}
