//! Function call expressions

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::ast::{FilterExpression, Span, precedence};
use crate::jsonpath::parser::{Parser, TokenStream};
use crate::jsonpath::tokens::{Token, TokenKind};

impl Parser<'_> {
    /// Parse the arguments of a call whose name and `(` have been consumed,
    /// then check the call against the function's declared signature
    pub(super) fn parse_function_call(
        &self,
        stream: &mut TokenStream<'_>,
        token: &Token,
    ) -> JsonPathResult<FilterExpression> {
        let mut args = Vec::new();

        while stream.peek_kind() != TokenKind::RParen {
            args.push(self.parse_filter_expression(stream, precedence::LOWEST)?);

            match stream.peek_kind() {
                TokenKind::RParen => break,
                TokenKind::Comma => {
                    stream.next();
                }
                _ => {
                    let found = stream.next();
                    return Err(JsonPathError::syntax(
                        format!("expected ',' or ')', found {}", found.kind().describe()),
                        found,
                    ));
                }
            }
        }

        stream.expect(TokenKind::RParen)?;
        stream.next();

        let name = token.text();
        self.types.check_call(token, name, &args)?;
        Ok(FilterExpression::Function {
            name: name.to_owned(),
            args,
            span: Span::new(token.offset()),
        })
    }
}
