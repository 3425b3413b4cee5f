//! Caret-style error diagnostics
//!
//! Renders the query, the line and column of the offending token and a
//! pointer line underneath it.

use super::types::JsonPathError;

const BOLD: &str = "\u{1b}[1m";
const RESET: &str = "\u{1b}[0m";

impl JsonPathError {
    /// One-based line and zero-based column of the offending token.
    ///
    /// The column counts characters, not bytes.
    #[must_use]
    pub fn line_and_column(&self) -> (usize, usize) {
        let query = self.token.source();
        let offset = clamp_to_boundary(query, self.token.offset());
        let prefix = &query[..offset];
        let line = prefix.matches('\n').count() + 1;
        let column = match prefix.rfind('\n') {
            Some(newline) => prefix[newline + 1..].chars().count(),
            None => prefix.chars().count(),
        };
        (line, column)
    }

    /// Render a multi-line diagnostic pointing at the offending token.
    ///
    /// With `highlight` set, the trailing message is wrapped in ANSI bold.
    #[must_use]
    pub fn detailed_message(&self, highlight: bool) -> String {
        let query = self.token.source();
        if query.trim().is_empty() {
            return "empty query".to_string();
        }

        let (line, column) = self.line_and_column();
        let source_line = query.lines().nth(line - 1).unwrap_or(query);
        let pad = " ".repeat(line.to_string().len());
        let carets = "^".repeat(self.token.text().chars().count().max(1));
        let pointer = format!("{}{carets}", " ".repeat(column));
        let message = if highlight {
            format!("{BOLD}{}{RESET}", self.message)
        } else {
            self.message.clone()
        };

        format!(
            "{kind}: {msg}\n{pad} -> '{query}' {line}:{column}\n{pad} |\n{line} | {source_line}\n{pad} | {pointer} {message}",
            kind = self.kind,
            msg = self.message,
        )
    }
}

fn clamp_to_boundary(query: &str, offset: usize) -> usize {
    let mut offset = offset.min(query.len());
    while !query.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
