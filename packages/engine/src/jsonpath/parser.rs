//! Query parser
//!
//! Turns the lexer's token sequence into a [`Query`]. Bracketed selections
//! are handled in `selector_parser` and filter expressions in
//! `filter_parser`; this module drives the segment loop and owns the token
//! cursor shared by both.

use crate::config::JsonPathConfig;
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{Query, Segment, Selector, Span};
use crate::jsonpath::tokens::{Token, TokenKind};
use crate::jsonpath::type_system::TypeSystem;

/// Cursor over a token sequence
///
/// Reading past the end keeps returning the final end-of-input token.
pub(crate) struct TokenStream<'t> {
    tokens: &'t [Token],
    index: usize,
    eoi: Token,
}

impl<'t> TokenStream<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        let eoi = match tokens.last() {
            Some(last) if last.is(TokenKind::Eoi) => last.clone(),
            Some(last) => Token::new(TokenKind::Eoi, "", last.source().len(), last.shared_source()),
            None => Token::synthetic("", std::sync::Arc::from("")),
        };
        Self {
            tokens,
            index: 0,
            eoi,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.eoi)
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind()
    }

    pub(crate) fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    /// Fail unless the next token is `kind`. Does not consume it.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> JsonPathResult<()> {
        if self.peek_kind() == kind {
            return Ok(());
        }
        let token = self.next();
        Err(JsonPathError::syntax(
            format!("expected {}, found {}", kind.describe(), token.kind().describe()),
            token,
        ))
    }

    /// Fail with `message` if the next token is `kind`
    pub(crate) fn expect_not(&mut self, kind: TokenKind, message: &str) -> JsonPathResult<()> {
        if self.peek_kind() == kind {
            return Err(JsonPathError::syntax(message, self.next()));
        }
        Ok(())
    }
}

/// Recursive descent parser with precedence climbing for filter expressions
pub(crate) struct Parser<'c> {
    pub(super) config: &'c JsonPathConfig,
    pub(super) types: TypeSystem<'c>,
}

impl<'c> Parser<'c> {
    pub(crate) fn new(config: &'c JsonPathConfig) -> Self {
        Self {
            config,
            types: TypeSystem::new(config),
        }
    }

    /// Parse a complete query: `$` followed by zero or more segments
    pub(crate) fn parse(&self, tokens: &[Token]) -> JsonPathResult<Query> {
        let mut stream = TokenStream::new(tokens);
        stream.expect(TokenKind::Root)?;
        stream.next();
        let query = self.parse_query(&mut stream)?;
        stream.expect(TokenKind::Eoi)?;
        Ok(query)
    }

    /// Parse segments until the next token cannot start one
    pub(super) fn parse_query(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<Query> {
        let mut segments = Vec::new();

        loop {
            match stream.peek_kind() {
                TokenKind::DoubleDot => {
                    let token = stream.next();
                    let selectors = self.parse_selectors(stream)?;
                    if selectors.is_empty() {
                        return Err(JsonPathError::syntax("bald descendant segment", token));
                    }
                    segments.push(Segment::Descendant(selectors, Span::new(token.offset())));
                }
                TokenKind::LBracket | TokenKind::Name | TokenKind::Wild => {
                    segments.push(Segment::Child(self.parse_selectors(stream)?));
                }
                _ => break,
            }
        }

        Ok(Query::new(segments))
    }

    fn parse_selectors(&self, stream: &mut TokenStream<'_>) -> JsonPathResult<Vec<Selector>> {
        match stream.peek_kind() {
            TokenKind::Name => Ok(vec![Selector::Name(stream.next().text().to_owned())]),
            TokenKind::Wild => {
                stream.next();
                Ok(vec![Selector::Wildcard])
            }
            TokenKind::LBracket => self.parse_bracketed_selection(stream),
            _ => Ok(Vec::new()),
        }
    }
}
