//! Quoted string scanning
//!
//! Token text is the raw string contents without the surrounding quotes.
//! Escape sequences are validated here and decoded by the parser.

use super::core::{LexState, Lexer, StringContext};
use crate::jsonpath::tokens::TokenKind;

const ESCAPES: [char; 8] = ['b', 'f', 'n', 'r', 't', 'u', '/', '\\'];

impl Lexer<'_> {
    pub(super) fn lex_quoted_string(
        &mut self,
        quote: char,
        context: StringContext,
    ) -> Option<LexState> {
        // Skip the opening quote.
        self.ignore();
        let kind = if quote == '\'' {
            TokenKind::SingleQuoteString
        } else {
            TokenKind::DoubleQuoteString
        };

        loop {
            match self.next() {
                Some('\\') => match self.next() {
                    Some(c) if c == quote || ESCAPES.contains(&c) => {}
                    _ => {
                        self.error("invalid escape");
                        return None;
                    }
                },
                Some(c) if c == quote => {
                    self.backup();
                    self.emit(kind);
                    self.next();
                    self.ignore();
                    return Some(context.resume());
                }
                Some(_) => {}
                None => {
                    let message = format!("unclosed string starting at index {}", self.start);
                    self.error(message);
                    return None;
                }
            }
        }
    }
}
