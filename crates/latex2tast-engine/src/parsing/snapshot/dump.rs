use crate::parsing::node::{Leaf, LeafKind, Node, Parent, ParentKind};

/// One line per node: `Kind@start..end`, kind details in parentheses and
/// leaf values quoted.
pub fn dump(node: &Node<'_>) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node<'_>, depth: usize) {
    let detail = match node {
        Node::Parent(Parent {
            kind: ParentKind::Header { depth: level },
            ..
        }) => format!("({level})"),
        Node::Parent(Parent {
            kind: ParentKind::Link { url },
            ..
        })
        | Node::Leaf(Leaf {
            kind: LeafKind::Image { url, .. },
            ..
        }) => format!("({url})"),
        _ => String::new(),
    };
    let span = node.span();
    let value = node.value().map(|v| format!(" {v:?}")).unwrap_or_default();
    out.push_str(&format!(
        "{:indent$}{}{detail}@{}..{}{value}\n",
        "",
        node.type_name(),
        span.start,
        span.end,
        indent = depth * 2
    ));
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}
