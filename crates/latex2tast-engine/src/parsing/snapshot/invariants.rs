use crate::parsing::node::Node;

/// Structural checks that hold for every tree `parse` returns.
pub fn check(text: &str, document: &Node<'_>) {
    let span = document.span();
    assert_eq!(
        (span.start, span.end),
        (0, text.len()),
        "document span does not cover the input"
    );
    check_node(text, document);
}

fn check_node(text: &str, node: &Node<'_>) {
    let span = node.span();
    assert!(
        span.start <= span.end && span.end <= text.len(),
        "{} span out of bounds: {span:?} (text len: {})",
        node.type_name(),
        text.len()
    );
    assert_eq!(
        node.raw(),
        &text[span.start..span.end],
        "{} raw is not its source slice",
        node.type_name()
    );

    let children = node.children();
    for child in children {
        let inner = child.span();
        assert!(
            span.start <= inner.start && inner.end <= span.end,
            "{} {inner:?} not contained in {} {span:?}",
            child.type_name(),
            node.type_name()
        );
    }
    for pair in children.windows(2) {
        let (left, right) = (pair[0].span(), pair[1].span());
        assert!(
            left.start < right.start && left.end <= right.start,
            "children out of order: {left:?} then {right:?}"
        );
        assert_eq!(
            left.end, right.start,
            "gap between children of {}",
            node.type_name()
        );
    }
    for child in children {
        check_node(text, child);
    }
}
