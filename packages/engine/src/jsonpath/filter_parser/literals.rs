//! Number literals

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::FilterExpression;
use crate::jsonpath::parser::Parser;
use crate::jsonpath::tokens::Token;

/// True if the integer part of a number literal has a redundant leading zero
fn has_leading_zero(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    end > 1 && digits.starts_with('0')
}

impl Parser<'_> {
    /// Integers may carry a non-negative exponent, e.g. `1e2`
    pub(super) fn parse_int_literal(&self, token: &Token) -> JsonPathResult<FilterExpression> {
        let text = token.text();
        let invalid = || JsonPathError::syntax("invalid integer literal", token.clone());

        if has_leading_zero(text) {
            return Err(invalid());
        }

        if !text.contains(['e', 'E']) {
            return text.parse::<i64>().map(FilterExpression::Int).map_err(|_| invalid());
        }

        let value = text.parse::<f64>().map_err(|_| invalid())?;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let in_range = value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64;
        if !in_range {
            return Err(invalid());
        }
        #[allow(clippy::cast_possible_truncation)]
        let value = value as i64;
        Ok(FilterExpression::Int(value))
    }

    pub(super) fn parse_float_literal(&self, token: &Token) -> JsonPathResult<FilterExpression> {
        let text = token.text();
        let invalid = || JsonPathError::syntax("invalid float literal", token.clone());

        if has_leading_zero(text) {
            return Err(invalid());
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(FilterExpression::Float(value)),
            _ => Err(invalid()),
        }
    }
}
