//! Located values produced by query evaluation

use std::ops::Deref;

use serde_json::Value;

use super::normalized_paths::{Location, PathElement};
use crate::pointer::JsonPointer;

/// A value found in a document, together with its location
#[derive(Debug, Clone)]
pub struct JsonPathNode<'a> {
    value: &'a Value,
    location: Location<'a>,
    root: &'a Value,
}

impl<'a> JsonPathNode<'a> {
    /// The node for the document root
    #[must_use]
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            location: Location::root(),
            root: value,
        }
    }

    /// Child node for an object member
    #[must_use]
    pub fn child_member(&self, name: &'a str, value: &'a Value) -> Self {
        Self {
            value,
            location: self.location.child(PathElement::Name(name)),
            root: self.root,
        }
    }

    /// Child node for an array element
    #[must_use]
    pub fn child_index(&self, index: usize, value: &'a Value) -> Self {
        Self {
            value,
            location: self.location.child(PathElement::Index(index)),
            root: self.root,
        }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The document this node was found in
    #[inline]
    #[must_use]
    pub fn document(&self) -> &'a Value {
        self.root
    }

    /// Normalized path of this node, e.g. `$['a'][1]`
    #[must_use]
    pub fn path(&self) -> String {
        self.location.to_path()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.location.depth()
    }

    /// JSON Pointer to this node, e.g. `/a/1`
    #[must_use]
    pub fn pointer(&self) -> JsonPointer {
        JsonPointer::from_location(&self.location)
    }
}

impl PartialEq for JsonPathNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.location == other.location
    }
}

/// An ordered list of nodes
///
/// Kept distinct from a JSON array so function extensions can tell a node
/// list argument from an array value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList<'a>(Vec<JsonPathNode<'a>>);

impl<'a> NodeList<'a> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, node: JsonPathNode<'a>) {
        self.0.push(node);
    }

    /// Values of all nodes, in order
    #[must_use]
    pub fn values(&self) -> Vec<&'a Value> {
        self.0.iter().map(JsonPathNode::value).collect()
    }

    /// Normalized paths of all nodes, in order
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(JsonPathNode::path).collect()
    }

    #[must_use]
    pub fn into_first(self) -> Option<JsonPathNode<'a>> {
        self.0.into_iter().next()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<JsonPathNode<'a>> {
        self.0
    }
}

impl<'a> Deref for NodeList<'a> {
    type Target = [JsonPathNode<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> From<Vec<JsonPathNode<'a>>> for NodeList<'a> {
    fn from(nodes: Vec<JsonPathNode<'a>>) -> Self {
        Self(nodes)
    }
}

impl<'a> FromIterator<JsonPathNode<'a>> for NodeList<'a> {
    fn from_iter<I: IntoIterator<Item = JsonPathNode<'a>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for NodeList<'a> {
    type Item = JsonPathNode<'a>;
    type IntoIter = std::vec::IntoIter<JsonPathNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'l, 'a> IntoIterator for &'l NodeList<'a> {
    type Item = &'l JsonPathNode<'a>;
    type IntoIter = std::slice::Iter<'l, JsonPathNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
