//! Parse-time well-typedness checks (RFC 9535 Section 2.4.3)
//!
//! Function calls are checked against the declared signatures of the
//! registered extensions. Comparison operands must be comparable, and
//! expressions used as tests must produce a logical result or a node list.

use super::core::FunctionType;
use crate::error::{JsonPathError, JsonPathResult};
use crate::config::JsonPathConfig;
use crate::jsonpath::ast::{FilterExpression, Query};
use crate::jsonpath::functions::FunctionRegistry;
use crate::jsonpath::tokens::Token;

/// RFC 9535 function type system checks
pub(crate) struct TypeSystem<'r> {
    config: &'r JsonPathConfig,
    registry: &'r FunctionRegistry,
}

impl<'r> TypeSystem<'r> {
    pub(crate) fn new(config: &'r JsonPathConfig) -> Self {
        Self {
            config,
            registry: config.functions(),
        }
    }

    fn is_singular(&self, query: &Query) -> bool {
        query.is_singular_in(self.config)
    }

    /// Declared result type of a function call expression
    pub(crate) fn result_type(&self, expression: &FilterExpression) -> Option<FunctionType> {
        match expression {
            FilterExpression::Function { name, .. } => self
                .registry
                .get(name)
                .ok()
                .map(|function| function.return_type()),
            _ => None,
        }
    }

    /// Check a call's name, arity and argument types
    pub(crate) fn check_call(
        &self,
        token: &Token,
        name: &str,
        args: &[FilterExpression],
    ) -> JsonPathResult<()> {
        let function = self
            .registry
            .get(name)
            .map_err(|error| JsonPathError::name_error(error.to_string(), token.clone()))?;

        let parameters = function.parameter_types();
        if args.len() != parameters.len() {
            let count = parameters.len();
            let plural = if count == 1 { "" } else { "s" };
            return Err(JsonPathError::type_error(
                format!("{name}() takes {count} argument{plural} ({} given)", args.len()),
                token.clone(),
            ));
        }

        for (index, (arg, parameter)) in args.iter().zip(parameters).enumerate() {
            if !self.accepts(*parameter, arg) {
                return Err(JsonPathError::type_error(
                    format!("{name}() argument {index} must be of {parameter}"),
                    token.clone(),
                ));
            }
        }

        Ok(())
    }

    fn accepts(&self, parameter: FunctionType, arg: &FilterExpression) -> bool {
        let result = self.result_type(arg);
        match parameter {
            FunctionType::ValueType => {
                arg.is_literal()
                    || arg.query().is_some_and(|query| self.is_singular(query))
                    || result == Some(FunctionType::ValueType)
            }
            FunctionType::LogicalType => {
                arg.is_query()
                    || arg.is_logical()
                    || matches!(
                        result,
                        Some(FunctionType::LogicalType | FunctionType::NodesType)
                    )
            }
            FunctionType::NodesType => arg.is_query() || result == Some(FunctionType::NodesType),
        }
    }

    /// Check an operand of `==`, `!=`, `<`, `<=`, `>` or `>=`
    pub(crate) fn check_comparable(&self, operand: &FilterExpression, token: &Token) -> JsonPathResult<()> {
        if let Some(query) = operand.query() {
            if !self.is_singular(query) {
                return Err(JsonPathError::syntax(
                    "non-singular query is not comparable",
                    token.clone(),
                ));
            }
            return Ok(());
        }

        if let FilterExpression::Function { name, .. } = operand {
            if self.result_type(operand) != Some(FunctionType::ValueType) {
                return Err(JsonPathError::type_error(
                    format!("result of {name}() is not comparable"),
                    token.clone(),
                ));
            }
            return Ok(());
        }

        if operand.is_logical() {
            return Err(JsonPathError::syntax(
                "logical expression is not comparable",
                token.clone(),
            ));
        }

        Ok(())
    }

    /// Check an expression used for its truth value: a filter selector, an
    /// operand of `&&` or `||` or the operand of `!`
    pub(crate) fn check_test(
        &self,
        expression: &FilterExpression,
        token: &Token,
        literal_message: &str,
    ) -> JsonPathResult<()> {
        if expression.is_literal() {
            return Err(JsonPathError::syntax(literal_message, token.clone()));
        }

        if let FilterExpression::Function { name, .. } = expression
            && self.result_type(expression) == Some(FunctionType::ValueType)
        {
            return Err(JsonPathError::type_error(
                format!("result of {name}() must be compared"),
                token.clone(),
            ));
        }

        Ok(())
    }
}
