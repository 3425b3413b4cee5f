//! Wildcard selection

use serde_json::Value;

use crate::jsonpath::node::{JsonPathNode, NodeList};

/// Every element of an array or member value of an object, in order
pub(super) fn select_all<'a>(node: &JsonPathNode<'a>, out: &mut NodeList<'a>) {
    match node.value() {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                out.push(node.child_index(index, item));
            }
        }
        Value::Object(members) => {
            for (name, value) in members {
                out.push(node.child_member(name, value));
            }
        }
        _ => {}
    }
}
