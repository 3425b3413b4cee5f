//! Error constructor functions
//!
//! One constructor per [`ErrorKind`], each taking the offending token.

use super::types::{ErrorKind, JsonPathError};
use crate::jsonpath::tokens::Token;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, token: Token) -> Self {
        Self {
            kind,
            message: message.into(),
            token,
        }
    }

    #[must_use]
    pub fn syntax(message: impl Into<String>, token: Token) -> Self {
        Self::new(ErrorKind::Syntax, message, token)
    }

    #[must_use]
    pub fn type_error(message: impl Into<String>, token: Token) -> Self {
        Self::new(ErrorKind::Type, message, token)
    }

    #[must_use]
    pub fn name_error(message: impl Into<String>, token: Token) -> Self {
        Self::new(ErrorKind::Name, message, token)
    }

    #[must_use]
    pub fn recursion(message: impl Into<String>, token: Token) -> Self {
        Self::new(ErrorKind::Recursion, message, token)
    }

    #[must_use]
    pub fn function(message: impl Into<String>, token: Token) -> Self {
        Self::new(ErrorKind::Function, message, token)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[inline]
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    #[inline]
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.kind == ErrorKind::Type
    }

    #[inline]
    #[must_use]
    pub fn is_name_error(&self) -> bool {
        self.kind == ErrorKind::Name
    }

    #[inline]
    #[must_use]
    pub fn is_recursion_error(&self) -> bool {
        self.kind == ErrorKind::Recursion
    }
}
