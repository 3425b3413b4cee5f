//! Name selector strategies

use std::fmt;

use serde_json::Value;

use crate::jsonpath::node::{JsonPathNode, NodeList};

/// Resolves `['name']` and `.name` selectors
///
/// The strategy is part of the query configuration, so alternative key
/// matching rules can be plugged in without changing the parser.
pub trait NameSelector: Send + Sync + fmt::Debug {
    /// Append the members of `node` matching `name` to `out`
    fn select<'a>(&self, node: &JsonPathNode<'a>, name: &str, out: &mut NodeList<'a>);

    /// True if `select` appends at most one node per call. Queries made of
    /// name selectors are only singular, and so comparable in filters, when
    /// this holds.
    fn is_singular(&self) -> bool {
        true
    }
}

/// Exact member name match, as RFC 9535 specifies
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameSelector;

impl NameSelector for ExactNameSelector {
    fn select<'a>(&self, node: &JsonPathNode<'a>, name: &str, out: &mut NodeList<'a>) {
        if let Value::Object(members) = node.value()
            && let Some((key, value)) = members.get_key_value(name)
        {
            out.push(node.child_member(key, value));
        }
    }
}

/// Member name match ignoring case
///
/// Every member whose name equals the selector's name after lowercasing is
/// selected, in member order. Queries using it are no longer guaranteed to
/// select a single node per name selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveNameSelector;

impl NameSelector for CaseInsensitiveNameSelector {
    fn select<'a>(&self, node: &JsonPathNode<'a>, name: &str, out: &mut NodeList<'a>) {
        let Value::Object(members) = node.value() else {
            return;
        };
        let wanted = name.to_lowercase();
        for (key, value) in members {
            if key.to_lowercase() == wanted {
                out.push(node.child_member(key, value));
            }
        }
    }

    fn is_singular(&self) -> bool {
        false
    }
}
