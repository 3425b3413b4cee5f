//! Token definitions for `JSONPath` lexical analysis
//!
//! Tokens are immutable once emitted by the lexer. Each one keeps the text it
//! was scanned from, its byte offset and a shared handle to the whole query so
//! that errors raised much later can still render a diagnostic.

use std::fmt;
use std::sync::Arc;

/// Kinds of tokens produced by the `JSONPath` lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural tokens
    /// Root identifier (`$`)
    Root,
    /// Current node identifier (`@`)
    Current,
    /// Shorthand member name (`.name`)
    Name,
    /// Wildcard selector (`*`)
    Wild,
    /// Descendant segment prefix (`..`)
    DoubleDot,
    /// Left bracket (`[`)
    LBracket,
    /// Right bracket (`]`)
    RBracket,
    /// Selector or argument separator (`,`)
    Comma,
    /// Slice separator (`:`)
    Colon,
    /// Filter selector introducer (`?`)
    Filter,
    /// Index or slice bound inside a bracketed selection
    Index,

    // Literals
    /// Single quoted string, text excludes the quotes
    SingleQuoteString,
    /// Double quoted string, text excludes the quotes
    DoubleQuoteString,
    /// Integer number literal inside a filter
    Int,
    /// Floating point number literal inside a filter
    Float,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // Functions and grouping
    /// Function extension name, the opening parenthesis is consumed with it
    Function,
    /// Left parenthesis (`(`)
    LParen,
    /// Right parenthesis (`)`)
    RParen,

    // Operators
    /// Logical not (`!`)
    Not,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Equality (`==`)
    Eq,
    /// Inequality (`!=`)
    Ne,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,

    // Special
    /// End of input
    Eoi,
    /// Lexical error, see [`Token::message`]
    Error,
}

impl TokenKind {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge
        )
    }

    /// Check if token is a logical infix operator
    #[inline]
    #[must_use]
    pub fn is_logical_operator(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Check if token can follow an operand as an infix operator
    #[inline]
    #[must_use]
    pub fn is_binary_operator(self) -> bool {
        self.is_comparison_operator() || self.is_logical_operator()
    }

    /// Check if token is a literal value
    #[inline]
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::SingleQuoteString
                | Self::DoubleQuoteString
                | Self::Int
                | Self::Float
                | Self::True
                | Self::False
                | Self::Null
        )
    }

    /// Human readable description used in "expected X, found Y" messages
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Root => "'$'",
            Self::Current => "'@'",
            Self::Name => "a name",
            Self::Wild => "'*'",
            Self::DoubleDot => "'..'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Filter => "'?'",
            Self::Index => "an index",
            Self::SingleQuoteString | Self::DoubleQuoteString => "a string",
            Self::Int => "an integer",
            Self::Float => "a float",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Null => "'null'",
            Self::Function => "a function call",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Not => "'!'",
            Self::And => "'&&'",
            Self::Or => "'||'",
            Self::Eq => "'=='",
            Self::Ne => "'!='",
            Self::Lt => "'<'",
            Self::Le => "'<='",
            Self::Gt => "'>'",
            Self::Ge => "'>='",
            Self::Eoi => "end of query",
            Self::Error => "an error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexical unit of a `JSONPath` query
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    offset: usize,
    source: Arc<str>,
    message: Option<String>,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize, source: Arc<str>) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            source,
            message: None,
        }
    }

    /// Build an error token carrying a diagnostic message
    #[must_use]
    pub fn error(
        text: impl Into<String>,
        offset: usize,
        source: Arc<str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: TokenKind::Error,
            text: text.into(),
            offset,
            source,
            message: Some(message.into()),
        }
    }

    /// Token standing in for document-level failures, like exceeding the
    /// recursion limit, which have no position in the query text
    #[must_use]
    pub fn synthetic(text: impl Into<String>, source: Arc<str>) -> Self {
        Self::new(TokenKind::Eoi, text, 0, source)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the token in the query
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full query this token was scanned from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn shared_source(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
