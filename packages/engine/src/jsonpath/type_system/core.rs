//! Core types for the `JSONPath` function type system

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::jsonpath::node::NodeList;

/// The three declared types of function parameters and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionType {
    /// `ValueType`: any JSON value, or Nothing
    ValueType,

    /// `LogicalType`: the result of a test or logical expression
    LogicalType,

    /// `NodesType`: a node list
    NodesType,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ValueType => "ValueType",
            Self::LogicalType => "LogicalType",
            Self::NodesType => "NodesType",
        })
    }
}

/// Result of evaluating a filter expression
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue<'a> {
    /// A JSON value, borrowed from the document or built from a literal
    Value(Cow<'a, Value>),
    /// The absence of a value
    Nothing,
    /// A logical result
    Logical(bool),
    /// Nodes selected by an embedded query
    Nodes(NodeList<'a>),
}

impl<'a> FilterValue<'a> {
    #[inline]
    #[must_use]
    pub fn owned(value: Value) -> Self {
        Self::Value(Cow::Owned(value))
    }

    #[inline]
    #[must_use]
    pub fn borrowed(value: &'a Value) -> Self {
        Self::Value(Cow::Borrowed(value))
    }

    /// Truthiness used by filter selectors and logical operators.
    ///
    /// Node lists are true when non-empty and logical values are themselves.
    /// Of plain values only the boolean `true` is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nodes(nodes) => !nodes.is_empty(),
            Self::Logical(value) => *value,
            Self::Value(value) => matches!(value.as_ref(), Value::Bool(true)),
            Self::Nothing => false,
        }
    }

    /// The JSON value, if this is a plain value
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// The string, if this is a plain string value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    #[inline]
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Unpack a node list for a value-typed parameter: no nodes is Nothing,
    /// one node is its value, anything else stays a node list
    #[must_use]
    pub fn unpack_nodes(self) -> Self {
        match self {
            Self::Nodes(nodes) => match nodes.len() {
                0 => Self::Nothing,
                1 => nodes
                    .into_first()
                    .map_or(Self::Nothing, |node| Self::borrowed(node.value())),
                _ => Self::Nodes(nodes),
            },
            other => other,
        }
    }
}
