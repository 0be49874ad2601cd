//! JSON rendering of a parsed document.

use latex2tast_engine::Node;
use serde_json::Value;

/// Which optional node fields to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub location: bool,
    pub raw: bool,
}

pub fn render(document: &Node<'_>, fields: Fields, compact: bool) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(document)?;
    strip(&mut value, fields);
    if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
}

/// Remove `range`/`loc` and `raw` from every node unless kept.
fn strip(value: &mut Value, fields: Fields) {
    let Value::Object(node) = value else {
        return;
    };
    if !fields.location {
        node.remove("range");
        node.remove("loc");
    }
    if !fields.raw {
        node.remove("raw");
    }
    if let Some(Value::Array(children)) = node.get_mut("children") {
        for child in children {
            strip(child, fields);
        }
    }
}
