//! Number literal scanning inside filter expressions

use super::core::Lexer;
use crate::jsonpath::tokens::TokenKind;

impl Lexer<'_> {
    /// Scan an int or float literal starting at the cursor.
    ///
    /// An integer with a negative exponent is classified as a float.
    pub(super) fn lex_number(&mut self) -> bool {
        if !self.accept_int() {
            self.next();
            self.error("unexpected filter selector token '-'");
            return false;
        }

        if self.accept('.') {
            if !self.accept_while(|c| c.is_ascii_digit()) {
                self.error("a fractional digit is required after a decimal point");
                return false;
            }
            self.accept_exponent();
            self.emit(TokenKind::Float);
            return true;
        }

        match self.accept_exponent() {
            Some(true) => self.emit(TokenKind::Float),
            _ => self.emit(TokenKind::Int),
        }
        true
    }

    /// Accept `[eE][+-]?[0-9]+`. Returns whether the exponent was negative,
    /// or `None` if there was no exponent.
    fn accept_exponent(&mut self) -> Option<bool> {
        if !matches!(self.peek(), Some('e' | 'E')) {
            return None;
        }

        let before = self.pos;
        self.next();
        let negative = self.accept('-');
        if !negative {
            self.accept('+');
        }

        if self.accept_while(|c| c.is_ascii_digit()) {
            Some(negative)
        } else {
            self.pos = before;
            None
        }
    }
}
