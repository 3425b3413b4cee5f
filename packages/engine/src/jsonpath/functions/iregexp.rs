//! I-Regexp (RFC 9485) to `regex` crate pattern translation
//!
//! I-Regexp is close to a subset of the `regex` crate syntax. The one
//! difference handled here is the dot: in I-Regexp `.` matches any character
//! except line feed and carriage return, so outside of character classes it
//! becomes `[^\n\r]`.

/// Translate an I-Regexp pattern into an equivalent `regex` crate pattern.
#[must_use]
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                // A leading `]` or `^]` is literal.
                let rest = chars.as_str();
                if let Some(stripped) = rest.strip_prefix("^]") {
                    out.push_str("^]");
                    chars = stripped.chars();
                } else if let Some(stripped) = rest.strip_prefix(']') {
                    out.push(']');
                    chars = stripped.chars();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '.' if !in_class => out.push_str(r"[^\n\r]"),
            c => out.push(c),
        }
    }

    out
}

/// Pattern for `match()`: the whole string must match.
///
/// Patterns that already begin with `^` or end with `$` are left as they are.
#[must_use]
pub fn full_match(pattern: &str) -> String {
    let translated = translate(pattern);
    if pattern.starts_with('^') || pattern.ends_with('$') {
        translated
    } else {
        format!(r"\A(?:{translated})\z")
    }
}
