//! Lexer state, cursor helpers and the segment-level states

use std::sync::Arc;

use crate::jsonpath::tokens::{Token, TokenKind};

/// Lexer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexState {
    Root,
    Segment,
    DescendantSegment,
    ShorthandSelector,
    InsideBracketedSegment,
    InsideFilter,
    QuotedString { quote: char, context: StringContext },
}

/// Where to resume once a quoted string has been scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringContext {
    Bracketed,
    Filter,
}

impl StringContext {
    pub(super) fn resume(self) -> LexState {
        match self {
            Self::Bracketed => LexState::InsideBracketedSegment,
            Self::Filter => LexState::InsideFilter,
        }
    }
}

/// An open function call and the filter it was opened in
#[derive(Debug, Clone, Copy)]
pub(super) struct CallFrame {
    pub(super) filter_depth: usize,
    pub(super) parens: usize,
}

/// `JSONPath` query scanner
pub(crate) struct Lexer<'q> {
    pub(super) query: &'q str,
    pub(super) source: Arc<str>,
    /// Start of the token being scanned
    pub(super) start: usize,
    /// Current byte position
    pub(super) pos: usize,
    /// Width of the last character consumed, for `backup`
    pub(super) last_width: usize,
    /// Number of open `[?` filter selectors
    pub(super) filter_depth: usize,
    pub(super) call_stack: Vec<CallFrame>,
    pub(super) tokens: Vec<Token>,
}

impl<'q> Lexer<'q> {
    pub(crate) fn new(query: &'q str) -> Self {
        Self {
            query,
            source: Arc::from(query),
            start: 0,
            pos: 0,
            last_width: 0,
            filter_depth: 0,
            call_stack: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Run the state machine to completion
    pub(crate) fn run(mut self) -> Vec<Token> {
        let mut state = Some(LexState::Root);
        while let Some(current) = state {
            state = self.step(current);
        }
        self.tokens
    }

    fn step(&mut self, state: LexState) -> Option<LexState> {
        match state {
            LexState::Root => self.lex_root(),
            LexState::Segment => self.lex_segment(),
            LexState::DescendantSegment => self.lex_descendant_segment(),
            LexState::ShorthandSelector => self.lex_shorthand_selector(),
            LexState::InsideBracketedSegment => self.lex_inside_bracketed_segment(),
            LexState::InsideFilter => self.lex_inside_filter(),
            LexState::QuotedString { quote, context } => self.lex_quoted_string(quote, context),
        }
    }

    // Cursor helpers

    pub(super) fn next(&mut self) -> Option<char> {
        let c = self.query[self.pos..].chars().next()?;
        self.last_width = c.len_utf8();
        self.pos += self.last_width;
        Some(c)
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.query[self.pos..].chars().next()
    }

    /// Step back over the last character consumed. Only valid once per `next`.
    pub(super) fn backup(&mut self) {
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    pub(super) fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub(super) fn accept(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.next();
            true
        } else {
            false
        }
    }

    pub(super) fn accept_while(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        let before = self.pos;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.next();
        }
        self.pos > before
    }

    pub(super) fn accept_whitespace(&mut self) -> bool {
        self.accept_while(is_whitespace)
    }

    /// Skip whitespace and start the next token after it
    pub(super) fn ignore_whitespace(&mut self) -> bool {
        let skipped = self.accept_whitespace();
        self.ignore();
        skipped
    }

    /// Accept `-?[0-9]+`, leaving the cursor untouched on failure
    pub(super) fn accept_int(&mut self) -> bool {
        let before = self.pos;
        self.accept('-');
        if self.accept_while(|c| c.is_ascii_digit()) {
            true
        } else {
            self.pos = before;
            false
        }
    }

    pub(super) fn accept_name(&mut self) -> bool {
        match self.peek() {
            Some(c) if is_name_first(c) => {
                self.next();
                self.accept_while(is_name_char);
                true
            }
            _ => false,
        }
    }

    // Token emission

    pub(super) fn emit(&mut self, kind: TokenKind) {
        let text = &self.query[self.start..self.pos];
        self.tokens
            .push(Token::new(kind, text, self.start, Arc::clone(&self.source)));
        self.start = self.pos;
    }

    pub(super) fn emit_text(&mut self, kind: TokenKind, text: &str) {
        self.tokens
            .push(Token::new(kind, text, self.start, Arc::clone(&self.source)));
        self.start = self.pos;
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        let text = &self.query[self.start..self.pos];
        self.tokens.push(Token::error(
            text,
            self.start,
            Arc::clone(&self.source),
            message,
        ));
    }

    // Segment-level states

    fn lex_root(&mut self) -> Option<LexState> {
        match self.next() {
            Some('$') => {
                self.emit(TokenKind::Root);
                Some(LexState::Segment)
            }
            Some(c) => {
                self.error(format!("expected '$', found '{c}'"));
                None
            }
            None => {
                self.error("expected '$', found end of query");
                None
            }
        }
    }

    fn lex_segment(&mut self) -> Option<LexState> {
        if self.accept_whitespace() && self.peek().is_none() {
            self.error("unexpected trailing whitespace");
            return None;
        }

        self.ignore();

        match self.next() {
            None => {
                self.emit_text(TokenKind::Eoi, "");
                None
            }
            Some('.') => {
                if self.peek() != Some('.') {
                    return Some(LexState::ShorthandSelector);
                }
                self.next();
                self.emit(TokenKind::DoubleDot);
                Some(LexState::DescendantSegment)
            }
            Some('[') => {
                self.emit(TokenKind::LBracket);
                Some(LexState::InsideBracketedSegment)
            }
            Some(c) => {
                if self.filter_depth > 0 {
                    self.backup();
                    Some(LexState::InsideFilter)
                } else {
                    self.error(format!(
                        "expected '.', '..' or a bracketed selection, found '{c}'"
                    ));
                    None
                }
            }
        }
    }

    fn lex_descendant_segment(&mut self) -> Option<LexState> {
        match self.next() {
            None => {
                self.error("bald descendant segment");
                None
            }
            Some('*') => {
                self.emit(TokenKind::Wild);
                Some(LexState::Segment)
            }
            Some('[') => {
                self.emit(TokenKind::LBracket);
                Some(LexState::InsideBracketedSegment)
            }
            Some(_) => {
                self.backup();
                if self.accept_name() {
                    self.emit(TokenKind::Name);
                    Some(LexState::Segment)
                } else {
                    let c = self.next().unwrap_or_default();
                    self.error(format!("unexpected descendant selection token '{c}'"));
                    None
                }
            }
        }
    }

    fn lex_shorthand_selector(&mut self) -> Option<LexState> {
        if self.peek().is_none() {
            self.error("unexpected trailing dot");
            return None;
        }

        self.ignore();

        if self.accept_whitespace() {
            self.error("unexpected whitespace after dot");
            return None;
        }

        if self.accept('*') {
            self.emit(TokenKind::Wild);
            return Some(LexState::Segment);
        }

        if self.accept_name() {
            self.emit(TokenKind::Name);
            return Some(LexState::Segment);
        }

        let c = self.next().unwrap_or_default();
        self.error(format!("unexpected shorthand selector '{c}'"));
        None
    }
}

/// Blank characters allowed between tokens
pub(super) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub(super) fn is_name_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || u32::from(c) >= 0x80
}

pub(super) fn is_name_char(c: char) -> bool {
    is_name_first(c) || c.is_ascii_digit()
}
