//! Filter selection

use serde_json::Value;

use crate::error::JsonPathResult;
use crate::jsonpath::ast::FilterExpression;
use crate::jsonpath::core_evaluator::Evaluator;
use crate::jsonpath::filter::FilterContext;
use crate::jsonpath::node::{JsonPathNode, NodeList};

/// Children of `node` for which `expression` is true, in order
pub(super) fn select_matching<'a>(
    evaluator: &Evaluator<'_>,
    expression: &FilterExpression,
    node: &JsonPathNode<'a>,
    out: &mut NodeList<'a>,
) -> JsonPathResult<()> {
    match node.value() {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let child = node.child_index(index, item);
                if FilterContext::new(*evaluator, &child).test(expression)? {
                    out.push(child);
                }
            }
        }
        Value::Object(members) => {
            for (name, value) in members {
                let child = node.child_member(name, value);
                if FilterContext::new(*evaluator, &child).test(expression)? {
                    out.push(child);
                }
            }
        }
        _ => {}
    }
    Ok(())
}
