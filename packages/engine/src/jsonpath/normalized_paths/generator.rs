//! Normalized path string generation

use super::types::PathElement;

/// Render a member name as a canonical single quoted string.
///
/// Control characters use JSON escapes, with lowercase hex for those
/// without a short form. Single quotes and backslashes are escaped, double
/// quotes are not.
#[must_use]
pub fn canonical_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

pub(super) fn normalized_path(elements: &[PathElement<'_>]) -> String {
    let mut path = String::from("$");
    for element in elements {
        match element {
            PathElement::Name(name) => {
                path.push('[');
                path.push_str(&canonical_string(name));
                path.push(']');
            }
            PathElement::Index(index) => {
                path.push('[');
                path.push_str(&index.to_string());
                path.push(']');
            }
        }
    }
    path
}
