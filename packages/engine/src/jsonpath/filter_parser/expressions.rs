//! Prefix and infix expression parsing

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{ComparisonOp, FilterExpression, LogicalOp, precedence};
use crate::jsonpath::parser::{Parser, TokenStream};
use crate::jsonpath::tokens::{Token, TokenKind};
use crate::jsonpath::unescape::unescape_string;

/// Binding power of an infix operator token
fn infix_precedence(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Or => Some(precedence::LOGICAL_OR),
        TokenKind::And => Some(precedence::LOGICAL_AND),
        TokenKind::Eq
        | TokenKind::Ne
        | TokenKind::Lt
        | TokenKind::Le
        | TokenKind::Gt
        | TokenKind::Ge => Some(precedence::RELATIONAL),
        _ => None,
    }
}

fn comparison_op(kind: TokenKind) -> Option<ComparisonOp> {
    match kind {
        TokenKind::Eq => Some(ComparisonOp::Eq),
        TokenKind::Ne => Some(ComparisonOp::Ne),
        TokenKind::Lt => Some(ComparisonOp::Lt),
        TokenKind::Le => Some(ComparisonOp::Le),
        TokenKind::Gt => Some(ComparisonOp::Gt),
        TokenKind::Ge => Some(ComparisonOp::Ge),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Operators of equal precedence associate to the left.
    pub(crate) fn parse_filter_expression(
        &self,
        stream: &mut TokenStream<'_>,
        precedence: u8,
    ) -> JsonPathResult<FilterExpression> {
        let token = stream.peek().clone();
        let mut left = self.parse_prefix(stream)?;

        while let Some(next) = infix_precedence(stream.peek_kind()) {
            if next <= precedence {
                break;
            }
            left = self.parse_infix(stream, left, &token)?;
        }

        Ok(left)
    }

    fn parse_prefix(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<FilterExpression> {
        let token = stream.next();
        match token.kind() {
            TokenKind::SingleQuoteString | TokenKind::DoubleQuoteString => {
                Ok(FilterExpression::String(unescape_string(&token)?))
            }
            TokenKind::True => Ok(FilterExpression::Bool(true)),
            TokenKind::False => Ok(FilterExpression::Bool(false)),
            TokenKind::Null => Ok(FilterExpression::Null),
            TokenKind::Int => self.parse_int_literal(&token),
            TokenKind::Float => self.parse_float_literal(&token),
            TokenKind::Function => self.parse_function_call(stream, &token),
            TokenKind::LParen => self.parse_grouped_expression(stream),
            TokenKind::Not => {
                let operand_token = stream.peek().clone();
                let operand = self.parse_filter_expression(stream, precedence::PREFIX)?;
                self.types
                    .check_test(&operand, &operand_token, "expression literals must be compared")?;
                Ok(FilterExpression::Not(Box::new(operand)))
            }
            TokenKind::Root => Ok(FilterExpression::RootQuery(self.parse_query(stream)?)),
            TokenKind::Current => Ok(FilterExpression::RelativeQuery(self.parse_query(stream)?)),
            TokenKind::Eoi => Err(JsonPathError::syntax("unexpected end of query", token)),
            _ => {
                let message = format!("unexpected '{}'", token.text());
                Err(JsonPathError::syntax(message, token))
            }
        }
    }

    fn parse_infix(
        &self,
        stream: &mut TokenStream<'_>,
        left: FilterExpression,
        left_token: &Token,
    ) -> JsonPathResult<FilterExpression> {
        let operator = stream.next();
        let binding = infix_precedence(operator.kind()).unwrap_or(precedence::LOWEST);
        let right_token = stream.peek().clone();
        let right = self.parse_filter_expression(stream, binding)?;

        if let Some(op) = comparison_op(operator.kind()) {
            self.types.check_comparable(&left, left_token)?;
            self.types.check_comparable(&right, &right_token)?;
            return Ok(FilterExpression::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        let op = match operator.kind() {
            TokenKind::And => LogicalOp::And,
            TokenKind::Or => LogicalOp::Or,
            _ => return Err(JsonPathError::syntax("unexpected token", operator)),
        };
        self.types
            .check_test(&left, left_token, "expression literals must be compared")?;
        self.types
            .check_test(&right, &right_token, "expression literals must be compared")?;
        Ok(FilterExpression::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<FilterExpression> {
        let expression = self.parse_filter_expression(stream, precedence::LOWEST)?;
        if stream.peek_kind() != TokenKind::RParen {
            return Err(JsonPathError::syntax("unbalanced parentheses", stream.next()));
        }
        stream.next();
        Ok(expression)
    }
}
