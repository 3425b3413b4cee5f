//! Index selector strategies and slice selection

use std::fmt;

use serde_json::Value;

use crate::jsonpath::ast::SliceSelector;
use crate::jsonpath::node::{JsonPathNode, NodeList};

/// Resolves `[index]` selectors
pub trait IndexSelector: Send + Sync + fmt::Debug {
    /// Append the element of `node` at `index` to `out`
    fn select<'a>(&self, node: &JsonPathNode<'a>, index: i64, out: &mut NodeList<'a>);

    /// True if `select` appends at most one node per call
    fn is_singular(&self) -> bool {
        true
    }
}

/// Array element by index, negative indices counting from the end
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayIndexSelector;

impl IndexSelector for ArrayIndexSelector {
    fn select<'a>(&self, node: &JsonPathNode<'a>, index: i64, out: &mut NodeList<'a>) {
        select_element(node, index, out);
    }
}

/// Array element by index, or object member whose name is the index in
/// decimal, e.g. `$[1]` selects `"b"` from `{"1": "b"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedIndexSelector;

impl IndexSelector for KeyedIndexSelector {
    fn select<'a>(&self, node: &JsonPathNode<'a>, index: i64, out: &mut NodeList<'a>) {
        match node.value() {
            Value::Object(members) => {
                if let Some((key, value)) = members.get_key_value(&index.to_string()) {
                    out.push(node.child_member(key, value));
                }
            }
            _ => select_element(node, index, out),
        }
    }
}

fn select_element<'a>(node: &JsonPathNode<'a>, index: i64, out: &mut NodeList<'a>) {
    if let Value::Array(items) = node.value()
        && let Some(position) = normalize_index(index, items.len())
    {
        out.push(node.child_index(position, &items[position]));
    }
}

/// Resolve a possibly negative index against an array length
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok().filter(|position| *position < len)
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

pub(super) fn select_slice<'a>(slice: &SliceSelector, node: &JsonPathNode<'a>, out: &mut NodeList<'a>) {
    if let Value::Array(items) = node.value() {
        for position in slice.indices(items.len()) {
            out.push(node.child_index(position, &items[position]));
        }
    }
}
