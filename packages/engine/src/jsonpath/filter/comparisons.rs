//! Comparison semantics (RFC 9535 Section 2.3.5.2.2)
//!
//! Node lists holding a single node compare as that node's value. Ordering
//! is only defined between two numbers or two strings, every other ordering
//! comparison is false.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::jsonpath::ast::ComparisonOp;
use crate::jsonpath::node::NodeList;
use crate::jsonpath::type_system::FilterValue;

enum Operand<'v, 'a> {
    Json(Cow<'v, Value>),
    Nothing,
    Nodes(&'v NodeList<'a>),
}

fn operand<'v, 'a>(value: &'v FilterValue<'a>) -> Operand<'v, 'a> {
    match value {
        FilterValue::Value(value) => Operand::Json(Cow::Borrowed(value.as_ref())),
        FilterValue::Logical(value) => Operand::Json(Cow::Owned(Value::Bool(*value))),
        FilterValue::Nothing => Operand::Nothing,
        FilterValue::Nodes(nodes) if nodes.len() == 1 => {
            Operand::Json(Cow::Borrowed(nodes[0].value()))
        }
        FilterValue::Nodes(nodes) => Operand::Nodes(nodes),
    }
}

/// Evaluate `left op right`
#[must_use]
pub fn compare(op: ComparisonOp, left: &FilterValue<'_>, right: &FilterValue<'_>) -> bool {
    match op {
        ComparisonOp::Eq => eq(left, right),
        ComparisonOp::Ne => !eq(left, right),
        ComparisonOp::Lt => lt(left, right),
        ComparisonOp::Le => lt(left, right) || eq(left, right),
        ComparisonOp::Gt => lt(right, left),
        ComparisonOp::Ge => lt(right, left) || eq(left, right),
    }
}

fn eq(left: &FilterValue<'_>, right: &FilterValue<'_>) -> bool {
    match (operand(left), operand(right)) {
        (Operand::Nodes(left), Operand::Nodes(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(l, r)| json_eq(l.value(), r.value()))
        }
        (Operand::Nodes(nodes), Operand::Nothing) | (Operand::Nothing, Operand::Nodes(nodes)) => {
            nodes.is_empty()
        }
        (Operand::Nothing, Operand::Nothing) => true,
        (Operand::Json(left), Operand::Json(right)) => json_eq(&left, &right),
        _ => false,
    }
}

fn lt(left: &FilterValue<'_>, right: &FilterValue<'_>) -> bool {
    let (Operand::Json(left), Operand::Json(right)) = (operand(left), operand(right)) else {
        return false;
    };
    match (left.as_ref(), right.as_ref()) {
        (Value::String(left), Value::String(right)) => left < right,
        (Value::Number(left), Value::Number(right)) => {
            number_cmp(left, right) == Some(Ordering::Less)
        }
        _ => false,
    }
}

/// Deep equality with numbers compared by value, so `1 == 1.0`
#[must_use]
pub fn json_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            number_cmp(left, right) == Some(Ordering::Equal)
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| json_eq(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, l)| right.get(key).is_some_and(|r| json_eq(l, r)))
        }
        _ => left == right,
    }
}

fn number_cmp(left: &Number, right: &Number) -> Option<Ordering> {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return Some(l.cmp(&r));
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return Some(l.cmp(&r));
    }
    left.as_f64()?.partial_cmp(&right.as_f64()?)
}
