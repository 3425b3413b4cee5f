//! Evaluation context and expression evaluation

use std::borrow::Cow;

use serde_json::Value;

use super::comparisons::compare;
use crate::error::JsonPathResult;
use crate::jsonpath::ast::{FilterExpression, LogicalOp, Span};
use crate::jsonpath::core_evaluator::Evaluator;
use crate::jsonpath::node::JsonPathNode;
use crate::jsonpath::type_system::{FilterValue, FunctionType};

/// Everything a filter expression can refer to: the node being tested
/// (`@`), the document (`$`) and the query configuration
pub(crate) struct FilterContext<'e, 'a> {
    evaluator: Evaluator<'e>,
    current: &'e JsonPathNode<'a>,
}

impl<'e, 'a> FilterContext<'e, 'a> {
    pub(crate) fn new(evaluator: Evaluator<'e>, current: &'e JsonPathNode<'a>) -> Self {
        Self { evaluator, current }
    }

    /// Evaluate `expression` as the test of a filter selector
    pub(crate) fn test(&self, expression: &FilterExpression) -> JsonPathResult<bool> {
        Ok(self.evaluate(expression)?.is_truthy())
    }

    pub(crate) fn evaluate(&self, expression: &FilterExpression) -> JsonPathResult<FilterValue<'a>> {
        match expression {
            FilterExpression::Bool(value) => Ok(FilterValue::owned(Value::Bool(*value))),
            FilterExpression::Null => Ok(FilterValue::owned(Value::Null)),
            FilterExpression::String(value) => Ok(FilterValue::owned(Value::String(value.clone()))),
            FilterExpression::Int(value) => Ok(FilterValue::owned(Value::from(*value))),
            FilterExpression::Float(value) => Ok(FilterValue::Value(Cow::Owned(
                serde_json::Number::from_f64(*value).map_or(Value::Null, Value::Number),
            ))),
            FilterExpression::Not(operand) => {
                Ok(FilterValue::Logical(!self.evaluate(operand)?.is_truthy()))
            }
            FilterExpression::Logical { op, left, right } => {
                let left = self.evaluate(left)?.is_truthy();
                let result = match op {
                    LogicalOp::And => left && self.evaluate(right)?.is_truthy(),
                    LogicalOp::Or => left || self.evaluate(right)?.is_truthy(),
                };
                Ok(FilterValue::Logical(result))
            }
            FilterExpression::Comparison { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(FilterValue::Logical(compare(*op, &left, &right)))
            }
            FilterExpression::RootQuery(query) => {
                let root = JsonPathNode::root(self.current.document());
                Ok(FilterValue::Nodes(self.evaluator.resolve(query.segments(), root)?))
            }
            FilterExpression::RelativeQuery(query) => Ok(FilterValue::Nodes(
                self.evaluator.resolve(query.segments(), self.current.clone())?,
            )),
            FilterExpression::Function { name, args, span } => self.call(name, args, *span),
        }
    }

    fn call(
        &self,
        name: &str,
        args: &[FilterExpression],
        span: Span,
    ) -> JsonPathResult<FilterValue<'a>> {
        // Calls are checked at compile time, a missing function is Nothing.
        let Ok(function) = self.evaluator.config().functions().get(name) else {
            return Ok(FilterValue::Nothing);
        };

        let mut values = Vec::with_capacity(args.len());
        for (arg, parameter) in args.iter().zip(function.parameter_types()) {
            let value = self.evaluate(arg)?;
            values.push(match parameter {
                FunctionType::NodesType => value,
                FunctionType::LogicalType => FilterValue::Logical(value.is_truthy()),
                FunctionType::ValueType => value.unpack_nodes(),
            });
        }

        function
            .call(values)
            .map_err(|error| self.evaluator.function_error(name, span, &error))
    }
}
