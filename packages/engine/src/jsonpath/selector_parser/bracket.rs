//! Selector lists inside `[` and `]`

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{Selector, precedence};
use crate::jsonpath::parser::{Parser, TokenStream};
use crate::jsonpath::tokens::TokenKind;
use crate::jsonpath::unescape::unescape_string;

impl Parser<'_> {
    pub(crate) fn parse_bracketed_selection(
        &self,
        stream: &mut TokenStream<'_>,
    ) -> JsonPathResult<Vec<Selector>> {
        stream.expect(TokenKind::LBracket)?;
        let segment_token = stream.next();
        let mut selectors = Vec::new();

        loop {
            match stream.peek_kind() {
                TokenKind::RBracket => break,
                TokenKind::Index => selectors.push(self.parse_index_or_slice(stream)?),
                TokenKind::SingleQuoteString | TokenKind::DoubleQuoteString => {
                    let token = stream.next();
                    selectors.push(Selector::Name(unescape_string(&token)?));
                }
                TokenKind::Colon => selectors.push(self.parse_slice(stream, None)?),
                TokenKind::Wild => {
                    stream.next();
                    selectors.push(Selector::Wildcard);
                }
                TokenKind::Filter => selectors.push(self.parse_filter_selector(stream)?),
                TokenKind::Eoi => {
                    return Err(JsonPathError::syntax("unexpected end of query", stream.next()));
                }
                _ => {
                    return Err(JsonPathError::syntax(
                        "unexpected token in bracketed selection",
                        stream.next(),
                    ));
                }
            }

            match stream.peek_kind() {
                TokenKind::Eoi => {
                    return Err(JsonPathError::syntax(
                        "unexpected end of selector list",
                        stream.next(),
                    ));
                }
                TokenKind::RBracket => break,
                _ => {
                    stream.expect(TokenKind::Comma)?;
                    stream.next();
                    stream.expect_not(TokenKind::RBracket, "unexpected trailing comma")?;
                }
            }
        }

        stream.expect(TokenKind::RBracket)?;
        stream.next();

        if selectors.is_empty() {
            return Err(JsonPathError::syntax("empty segment", segment_token));
        }

        Ok(selectors)
    }

    fn parse_filter_selector(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<Selector> {
        stream.next();
        let token = stream.peek().clone();
        let expression = self.parse_filter_expression(stream, precedence::LOWEST)?;
        self.types
            .check_test(&expression, &token, "filter expression literals must be compared")?;
        Ok(Selector::Filter(Box::new(expression)))
    }
}
