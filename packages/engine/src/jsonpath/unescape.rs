//! Decoding of quoted string literals

use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::tokens::{Token, TokenKind};

/// Replace the escape sequences in a string token with the characters they
/// stand for
///
/// # Errors
///
/// Returns a syntax error for unknown escapes, malformed or unpaired
/// `\u` surrogates and unescaped control characters.
pub fn unescape_string(token: &Token) -> JsonPathResult<String> {
    let quote = match token.kind() {
        TokenKind::SingleQuoteString => '\'',
        _ => '"',
    };
    let error = |message: &str| JsonPathError::syntax(message, token.clone());

    let mut unescaped = String::with_capacity(token.text().len());
    let mut chars = token.text().chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            if u32::from(c) <= 0x1F {
                return Err(error("invalid character"));
            }
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('b') => unescaped.push('\u{8}'),
            Some('f') => unescaped.push('\u{c}'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some('/') => unescaped.push('/'),
            Some('\\') => unescaped.push('\\'),
            Some(c) if c == quote => unescaped.push(quote),
            Some('u') => unescaped.push(decode_hex_char(&mut chars).map_err(|message| error(message))?),
            _ => return Err(error("unknown escape sequence")),
        }
    }

    Ok(unescaped)
}

/// Decode the code point after `\u`, joining a surrogate pair if needed
fn decode_hex_char(chars: &mut std::str::Chars<'_>) -> Result<char, &'static str> {
    let high = hex_digits(chars)?;

    if is_low_surrogate(high) {
        return Err("unexpected low surrogate");
    }

    if !is_high_surrogate(high) {
        return char::from_u32(high).ok_or("invalid escape sequence");
    }

    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err("incomplete escape sequence");
    }

    let low = hex_digits(chars)?;
    if !is_low_surrogate(low) {
        return Err("unexpected low surrogate");
    }

    let code_point = 0x10000 + (((high & 0x03FF) << 10) | (low & 0x03FF));
    char::from_u32(code_point).ok_or("invalid escape sequence")
}

fn hex_digits(chars: &mut std::str::Chars<'_>) -> Result<u32, &'static str> {
    let mut code_point = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .ok_or("incomplete escape sequence")?
            .to_digit(16)
            .ok_or("invalid escape sequence")?;
        code_point = (code_point << 4) | digit;
    }
    Ok(code_point)
}

fn is_high_surrogate(code_point: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code_point)
}

fn is_low_surrogate(code_point: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code_point)
}
