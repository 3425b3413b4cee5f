//! Tokenizer module tests
//!
//! Token kinds, text and offsets produced by the lexer state machine

use jsonp3_engine::error::ErrorKind;
use jsonp3_engine::jsonpath::{TokenKind, tokenize};
use pretty_assertions::assert_eq;

fn kinds(query: &str) -> Vec<TokenKind> {
    tokenize(query)
        .expect("Failed to tokenize query")
        .iter()
        .map(|token| token.kind())
        .collect()
}

fn summary(query: &str) -> Vec<(TokenKind, String, usize)> {
    tokenize(query)
        .expect("Failed to tokenize query")
        .iter()
        .map(|token| (token.kind(), token.text().to_string(), token.offset()))
        .collect()
}

#[cfg(test)]
mod segment_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_shorthand_name() {
        assert_eq!(
            summary("$.foo.bar"),
            vec![
                (TokenKind::Root, "$".to_string(), 0),
                (TokenKind::Name, "foo".to_string(), 2),
                (TokenKind::Name, "bar".to_string(), 6),
                (TokenKind::Eoi, String::new(), 9),
            ]
        );
    }

    #[test]
    fn test_bracketed_name() {
        assert_eq!(
            summary("$['foo'][\"bar\"]"),
            vec![
                (TokenKind::Root, "$".to_string(), 0),
                (TokenKind::LBracket, "[".to_string(), 1),
                (TokenKind::SingleQuoteString, "foo".to_string(), 3),
                (TokenKind::RBracket, "]".to_string(), 7),
                (TokenKind::LBracket, "[".to_string(), 8),
                (TokenKind::DoubleQuoteString, "bar".to_string(), 10),
                (TokenKind::RBracket, "]".to_string(), 14),
                (TokenKind::Eoi, String::new(), 15),
            ]
        );
    }

    #[test]
    fn test_index_and_slice() {
        assert_eq!(
            kinds("$.foo[1, -1:]"),
            vec![
                TokenKind::Root,
                TokenKind::Name,
                TokenKind::LBracket,
                TokenKind::Index,
                TokenKind::Comma,
                TokenKind::Index,
                TokenKind::Colon,
                TokenKind::RBracket,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_whitespace_after_root() {
        assert_eq!(
            summary("$ .foo"),
            vec![
                (TokenKind::Root, "$".to_string(), 0),
                (TokenKind::Name, "foo".to_string(), 3),
                (TokenKind::Eoi, String::new(), 6),
            ]
        );
    }

    #[test]
    fn test_descendant_segments() {
        assert_eq!(
            kinds("$..foo..*..[0]"),
            vec![
                TokenKind::Root,
                TokenKind::DoubleDot,
                TokenKind::Name,
                TokenKind::DoubleDot,
                TokenKind::Wild,
                TokenKind::DoubleDot,
                TokenKind::LBracket,
                TokenKind::Index,
                TokenKind::RBracket,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_non_ascii_shorthand_name() {
        let tokens = tokenize("$.café").expect("Failed to tokenize query");
        assert_eq!(tokens[1].kind(), TokenKind::Name);
        assert_eq!(tokens[1].text(), "café");
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comparison_filter() {
        assert_eq!(
            kinds("$[?@.a >= 1.5 && !@.b]"),
            vec![
                TokenKind::Root,
                TokenKind::LBracket,
                TokenKind::Filter,
                TokenKind::Current,
                TokenKind::Name,
                TokenKind::Ge,
                TokenKind::Float,
                TokenKind::And,
                TokenKind::Not,
                TokenKind::Current,
                TokenKind::Name,
                TokenKind::RBracket,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_function_call_consumes_paren() {
        let tokens = tokenize("$[?length(@) == 2]").expect("Failed to tokenize query");
        let function = &tokens[3];
        assert_eq!(function.kind(), TokenKind::Function);
        assert_eq!(function.text(), "length");
        assert_eq!(tokens[4].kind(), TokenKind::Current);
        assert_eq!(tokens[5].kind(), TokenKind::RParen);
    }

    #[test]
    fn test_nested_filter_inside_function_call() {
        assert_eq!(
            kinds("$[?count(@.likes[?@.location]) > 3]"),
            vec![
                TokenKind::Root,
                TokenKind::LBracket,
                TokenKind::Filter,
                TokenKind::Function,
                TokenKind::Current,
                TokenKind::Name,
                TokenKind::LBracket,
                TokenKind::Filter,
                TokenKind::Current,
                TokenKind::Name,
                TokenKind::RBracket,
                TokenKind::RParen,
                TokenKind::Gt,
                TokenKind::Int,
                TokenKind::RBracket,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_comma_between_function_arguments() {
        assert_eq!(
            kinds("$[?match(@.a, 'x'), 0]"),
            vec![
                TokenKind::Root,
                TokenKind::LBracket,
                TokenKind::Filter,
                TokenKind::Function,
                TokenKind::Current,
                TokenKind::Name,
                TokenKind::Comma,
                TokenKind::SingleQuoteString,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Index,
                TokenKind::RBracket,
                TokenKind::Eoi,
            ]
        );
    }

    #[test]
    fn test_keyword_literals() {
        assert_eq!(
            kinds("$[?@.a == true || @.a == null]")[5..8],
            [TokenKind::Eq, TokenKind::True, TokenKind::Or]
        );
    }

    #[test]
    fn test_exponent_classification() {
        let tokens = tokenize("$[?@.a == 1e2 || @.a == 1e-2]").expect("Failed to tokenize query");
        let numbers: Vec<TokenKind> = tokens
            .iter()
            .filter(|token| token.kind().is_literal())
            .map(|token| token.kind())
            .collect();
        assert_eq!(numbers, vec![TokenKind::Int, TokenKind::Float]);
    }
}

#[cfg(test)]
mod lexical_error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex_error(query: &str) -> String {
        let error = tokenize(query).expect_err("Expected a lexical error");
        assert_eq!(error.kind, ErrorKind::Syntax, "query: {query}");
        error.message
    }

    #[test]
    fn test_missing_root() {
        assert_eq!(lex_error("foo.bar"), "expected '$', found 'f'");
    }

    #[test]
    fn test_root_followed_by_name() {
        assert_eq!(
            lex_error("$foo"),
            "expected '.', '..' or a bracketed selection, found 'f'"
        );
    }

    #[test]
    fn test_whitespace_after_dot() {
        assert_eq!(lex_error("$. foo"), "unexpected whitespace after dot");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(lex_error("$.foo."), "unexpected trailing dot");
    }

    #[test]
    fn test_bald_descendant_segment() {
        assert_eq!(lex_error("$.."), "bald descendant segment");
    }

    #[test]
    fn test_unclosed_selection() {
        assert_eq!(lex_error("$[1,2"), "unclosed bracketed selection");
        assert_eq!(lex_error("$[?@.a < 1"), "unclosed bracketed selection");
    }

    #[test]
    fn test_single_equals() {
        assert_eq!(
            lex_error("$[?@.a = 1]"),
            "found '=', did you mean '==', '!=', '<=' or '>='?"
        );
    }

    #[test]
    fn test_unbalanced_function_parentheses() {
        assert_eq!(
            lex_error("$.values[?match(@.a, value($..['regex'])]"),
            "unbalanced parentheses"
        );
    }

    #[test]
    fn test_invalid_escape() {
        assert_eq!(lex_error(r"$['\q']"), "invalid escape");
    }

    #[test]
    fn test_unknown_word_in_filter() {
        assert_eq!(
            lex_error("$[?@.a == nil]"),
            "unexpected filter selector token 'nil'"
        );
    }
}
