//! Index and slice selectors

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{Selector, SliceSelector};
use crate::jsonpath::parser::{Parser, TokenStream};
use crate::jsonpath::tokens::{Token, TokenKind};

impl Parser<'_> {
    /// Parse `i`, or `i:...` when a colon follows the first integer
    pub(super) fn parse_index_or_slice(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<Selector> {
        let token = stream.next();
        let index = self.parse_i_json_int(&token)?;

        if stream.peek_kind() == TokenKind::Colon {
            self.parse_slice(stream, Some(index))
        } else {
            Ok(Selector::Index(index))
        }
    }

    /// Parse the remainder of a slice from its first colon
    pub(super) fn parse_slice(
        &self,
        stream: &mut TokenStream<'_>,
        start: Option<i64>,
    ) -> JsonPathResult<Selector> {
        stream.expect(TokenKind::Colon)?;
        stream.next();

        let mut stop = None;
        let mut step = None;

        if stream.peek_kind() == TokenKind::Index {
            stop = Some(self.parse_i_json_int(&stream.next())?);
        }

        if stream.peek_kind() == TokenKind::Colon {
            stream.next();
            if stream.peek_kind() == TokenKind::Index {
                step = Some(self.parse_i_json_int(&stream.next())?);
            }
        }

        match stream.peek_kind() {
            TokenKind::RBracket | TokenKind::Comma => {
                Ok(Selector::Slice(SliceSelector::new(start, stop, step)))
            }
            _ => {
                let token = stream.next();
                Err(JsonPathError::syntax(
                    format!("expected a slice, found '{}'", token.text()),
                    token,
                ))
            }
        }
    }

    /// Parse an I-JSON integer: no redundant leading zeros, within the
    /// configured index bounds
    pub(crate) fn parse_i_json_int(&self, token: &Token) -> JsonPathResult<i64> {
        let text = token.text();

        if text.len() > 1 && (text.starts_with('0') || text.starts_with("-0")) {
            return Err(JsonPathError::syntax(
                format!("invalid index '{text}'"),
                token.clone(),
            ));
        }

        let Ok(value) = text.parse::<i64>() else {
            let digits = text.strip_prefix('-').unwrap_or(text);
            let message = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                "index out of range"
            } else {
                "invalid I-JSON integer"
            };
            return Err(JsonPathError::syntax(message, token.clone()));
        };

        if value < self.config.min_int_index() || value > self.config.max_int_index() {
            return Err(JsonPathError::syntax("index out of range", token.clone()));
        }

        Ok(value)
    }
}
