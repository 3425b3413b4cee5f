//! `JSONPath` lexical scanner
//!
//! A state machine over the query text. Each state consumes characters from
//! the current position and returns the next state, or `None` to stop.
//! Lexical errors are emitted as [`TokenKind::Error`] tokens and converted into
//! a [`JsonPathError`] by [`tokenize`].

mod brackets;
mod core;
mod numbers;
mod strings;

pub(crate) use self::core::Lexer;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::tokens::{Token, TokenKind};

/// Scan `query` into a flat token sequence ending with [`TokenKind::Eoi`].
///
/// # Errors
///
/// Returns a syntax error if the scanner stopped on an error token.
pub fn tokenize(query: &str) -> JsonPathResult<Vec<Token>> {
    let mut tokens = Lexer::new(query).run();
    match tokens.last() {
        Some(last) if last.kind() == TokenKind::Error => {
            let token = tokens.swap_remove(tokens.len() - 1);
            let message = token.message().unwrap_or("unexpected token").to_string();
            Err(JsonPathError::syntax(message, token))
        }
        _ => Ok(tokens),
    }
}
