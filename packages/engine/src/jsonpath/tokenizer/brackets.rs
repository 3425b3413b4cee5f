//! Bracketed selection and filter expression states

use super::core::{CallFrame, LexState, Lexer, StringContext};
use crate::jsonpath::tokens::TokenKind;

impl Lexer<'_> {
    pub(super) fn lex_inside_bracketed_segment(&mut self) -> Option<LexState> {
        loop {
            self.ignore_whitespace();

            match self.next() {
                Some(']') => {
                    self.emit(TokenKind::RBracket);
                    return Some(if self.filter_depth > 0 {
                        LexState::InsideFilter
                    } else {
                        LexState::Segment
                    });
                }
                None => {
                    self.error("unclosed bracketed selection");
                    return None;
                }
                Some('*') => self.emit(TokenKind::Wild),
                Some('?') => {
                    self.emit(TokenKind::Filter);
                    self.filter_depth += 1;
                    return Some(LexState::InsideFilter);
                }
                Some(',') => self.emit(TokenKind::Comma),
                Some(':') => self.emit(TokenKind::Colon),
                Some(quote @ ('\'' | '"')) => {
                    return Some(LexState::QuotedString {
                        quote,
                        context: StringContext::Bracketed,
                    });
                }
                Some(c) => {
                    self.backup();
                    if self.accept_int() {
                        self.emit(TokenKind::Index);
                    } else {
                        self.next();
                        self.error(format!("unexpected token '{c}' in bracketed selection"));
                        return None;
                    }
                }
            }
        }
    }

    pub(super) fn lex_inside_filter(&mut self) -> Option<LexState> {
        loop {
            self.ignore_whitespace();

            match self.next() {
                None => {
                    self.error("unclosed bracketed selection");
                    return None;
                }
                Some(']') => {
                    if self.in_function_call() {
                        self.error("unbalanced parentheses");
                        return None;
                    }
                    self.filter_depth -= 1;
                    self.backup();
                    return Some(LexState::InsideBracketedSegment);
                }
                Some(',') => {
                    self.emit(TokenKind::Comma);
                    // A comma between function arguments does not end the filter.
                    if self.in_function_call() {
                        continue;
                    }
                    self.filter_depth -= 1;
                    return Some(LexState::InsideBracketedSegment);
                }
                Some(quote @ ('\'' | '"')) => {
                    return Some(LexState::QuotedString {
                        quote,
                        context: StringContext::Filter,
                    });
                }
                Some('(') => {
                    self.emit(TokenKind::LParen);
                    if let Some(frame) = self.open_call_frame() {
                        frame.parens += 1;
                    }
                }
                Some(')') => {
                    self.emit(TokenKind::RParen);
                    let closes_call = match self.open_call_frame() {
                        Some(frame) => {
                            frame.parens -= 1;
                            frame.parens == 0
                        }
                        None => false,
                    };
                    if closes_call {
                        self.call_stack.pop();
                    }
                }
                Some('$') => {
                    self.emit(TokenKind::Root);
                    return Some(LexState::Segment);
                }
                Some('@') => {
                    self.emit(TokenKind::Current);
                    return Some(LexState::Segment);
                }
                Some('.') => {
                    self.backup();
                    return Some(LexState::Segment);
                }
                Some('!') => {
                    if self.accept('=') {
                        self.emit(TokenKind::Ne);
                    } else {
                        self.emit(TokenKind::Not);
                    }
                }
                Some('=') => {
                    if self.accept('=') {
                        self.emit(TokenKind::Eq);
                    } else {
                        self.error("found '=', did you mean '==', '!=', '<=' or '>='?");
                        return None;
                    }
                }
                Some('<') => {
                    if self.accept('=') {
                        self.emit(TokenKind::Le);
                    } else {
                        self.emit(TokenKind::Lt);
                    }
                }
                Some('>') => {
                    if self.accept('=') {
                        self.emit(TokenKind::Ge);
                    } else {
                        self.emit(TokenKind::Gt);
                    }
                }
                Some('&') => {
                    if self.accept('&') {
                        self.emit(TokenKind::And);
                    } else {
                        self.error("unexpected filter selector token '&', did you mean '&&'?");
                        return None;
                    }
                }
                Some('|') => {
                    if self.accept('|') {
                        self.emit(TokenKind::Or);
                    } else {
                        self.error("unexpected filter selector token '|', did you mean '||'?");
                        return None;
                    }
                }
                Some(c) if c == '-' || c.is_ascii_digit() => {
                    self.backup();
                    if !self.lex_number() {
                        return None;
                    }
                }
                Some(c) if c.is_ascii_lowercase() => {
                    self.backup();
                    if !self.lex_word() {
                        return None;
                    }
                }
                Some(c) => {
                    self.error(format!("unexpected filter selector token '{c}'"));
                    return None;
                }
            }
        }
    }

    /// Scan a keyword literal or a function name. Function names must be
    /// followed immediately by `(`, which is consumed with the name.
    fn lex_word(&mut self) -> bool {
        self.accept_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if self.peek() == Some('(') {
            self.call_stack.push(CallFrame {
                filter_depth: self.filter_depth,
                parens: 1,
            });
            self.emit(TokenKind::Function);
            self.next();
            self.ignore();
            return true;
        }

        let kind = match &self.query[self.start..self.pos] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            word => {
                let message = format!("unexpected filter selector token '{word}'");
                self.error(message);
                return false;
            }
        };
        self.emit(kind);
        true
    }

    /// True when the innermost open function call belongs to the current filter
    pub(super) fn in_function_call(&self) -> bool {
        self.call_stack
            .last()
            .is_some_and(|frame| frame.filter_depth == self.filter_depth)
    }

    fn open_call_frame(&mut self) -> Option<&mut CallFrame> {
        let depth = self.filter_depth;
        self.call_stack
            .last_mut()
            .filter(|frame| frame.filter_depth == depth)
    }
}
