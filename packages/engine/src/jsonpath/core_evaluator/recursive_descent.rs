//! Pre-order traversal for descendant segments
//!
//! Visits a node, then each of its children in document order: arrays by
//! ascending index and objects in member order. Depth is counted from the
//! starting node, which is at depth one. Visiting a node deeper than the
//! limit yields an error and ends the walk.

use serde_json::Value;

use crate::jsonpath::node::JsonPathNode;

/// The depth limit was exceeded at the given depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DepthExceeded(pub(crate) usize);

pub(crate) struct DescendantWalker<'a> {
    stack: Vec<(JsonPathNode<'a>, usize)>,
    max_depth: usize,
    failed: bool,
}

impl<'a> DescendantWalker<'a> {
    pub(crate) fn new(start: JsonPathNode<'a>, max_depth: usize) -> Self {
        Self {
            stack: vec![(start, 1)],
            max_depth,
            failed: false,
        }
    }
}

impl<'a> Iterator for DescendantWalker<'a> {
    type Item = Result<JsonPathNode<'a>, DepthExceeded>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (node, depth) = self.stack.pop()?;
        if depth > self.max_depth {
            tracing::debug!(depth, max_depth = self.max_depth, "descendant traversal too deep");
            self.failed = true;
            self.stack.clear();
            return Some(Err(DepthExceeded(depth)));
        }

        // Children go on the stack last-first so they are visited in order.
        match node.value() {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate().rev() {
                    self.stack.push((node.child_index(index, item), depth + 1));
                }
            }
            Value::Object(members) => {
                for (name, value) in members.iter().rev() {
                    self.stack.push((node.child_member(name, value), depth + 1));
                }
            }
            _ => {}
        }

        tracing::trace!(path = %node.location(), depth, "visiting descendant");
        Some(Ok(node))
    }
}
