//! Error module tests
//!
//! Error kinds raised at compile time and the rendered diagnostics

use jsonp3_engine::error::{ErrorKind, JsonPathError};
use jsonp3_engine::jsonpath::CompiledQuery;
use pretty_assertions::assert_eq;

fn compile_error(query: &str) -> JsonPathError {
    match CompiledQuery::compile(query) {
        Ok(compiled) => panic!("Expected '{query}' to fail, compiled to {compiled}"),
        Err(error) => error,
    }
}

fn assert_error(query: &str, kind: ErrorKind, message: &str) {
    let error = compile_error(query);
    assert_eq!(error.kind, kind, "query: {query}");
    assert_eq!(error.message, message, "query: {query}");
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unclosed_selection_list() {
        assert_eq!(compile_error("$[1,2").kind, ErrorKind::Syntax);
        assert_eq!(compile_error("$[?@.a < 1").kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_nested_functions_with_unbalanced_parens() {
        assert_eq!(
            compile_error("$.values[?match(@.a, value($..['regex'])]").kind,
            ErrorKind::Syntax
        );
    }

    #[test]
    fn test_bracketed_selection_errors() {
        assert_error("$[]", ErrorKind::Syntax, "empty segment");
        assert_error("$[1,]", ErrorKind::Syntax, "unexpected trailing comma");
        assert_error("$[1 2]", ErrorKind::Syntax, "expected ',', found an index");
    }

    #[test]
    fn test_index_errors() {
        assert_error("$[01]", ErrorKind::Syntax, "invalid index '01'");
        assert_error("$[-0]", ErrorKind::Syntax, "invalid index '-0'");
        assert_error("$[9007199254740992]", ErrorKind::Syntax, "index out of range");
        assert_error("$[-9007199254740992]", ErrorKind::Syntax, "index out of range");
        assert_error("$[99999999999999999999]", ErrorKind::Syntax, "index out of range");
        assert!(CompiledQuery::compile("$[9007199254740991]").is_ok());
        assert!(CompiledQuery::compile("$[-9007199254740991]").is_ok());
    }

    #[test]
    fn test_filter_literals_must_be_compared() {
        assert_error("$[?true]", ErrorKind::Syntax, "filter expression literals must be compared");
        assert_error("$[?'a']", ErrorKind::Syntax, "filter expression literals must be compared");
        assert_error("$[?@.a && 1]", ErrorKind::Syntax, "expression literals must be compared");
        assert_error("$[?!null]", ErrorKind::Syntax, "expression literals must be compared");
    }

    #[test]
    fn test_non_singular_query_comparison() {
        assert_error("$[?@.* == 1]", ErrorKind::Syntax, "non-singular query is not comparable");
        assert_error("$[?@..a == 1]", ErrorKind::Syntax, "non-singular query is not comparable");
        assert!(CompiledQuery::compile("$[?@.a[0] == 1]").is_ok());
    }

    #[test]
    fn test_logical_expression_comparison() {
        assert_error(
            "$[?(@.a && @.b) == true]",
            ErrorKind::Syntax,
            "logical expression is not comparable",
        );
    }

    #[test]
    fn test_number_literals() {
        assert_error("$[?@.a == 01]", ErrorKind::Syntax, "invalid integer literal");
        assert_error("$[?@.a == 00.5]", ErrorKind::Syntax, "invalid float literal");
        assert_error("$[?@.a == 1e999]", ErrorKind::Syntax, "invalid integer literal");
        assert_error("$[?@.a == 1.5e999]", ErrorKind::Syntax, "invalid float literal");
        assert!(CompiledQuery::compile("$[?@.a == -0]").is_ok());
        assert!(CompiledQuery::compile("$[?@.a == 0.5e-3]").is_ok());
    }

    #[test]
    fn test_unbalanced_grouping() {
        assert_error("$[?(@.a == 1]", ErrorKind::Syntax, "unbalanced parentheses");
    }

    #[test]
    fn test_string_escapes() {
        assert_error(r"$['\ud83d']", ErrorKind::Syntax, "incomplete escape sequence");
        assert_error(r"$['\ude00']", ErrorKind::Syntax, "unexpected low surrogate");
        assert!(CompiledQuery::compile(r"$['\u0000']").is_ok());
    }
}

#[cfg(test)]
mod type_error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_arity() {
        assert_error(
            "$[?count(@.a, @.b) > 1]",
            ErrorKind::Type,
            "count() takes 1 argument (2 given)",
        );
        assert_error(
            "$[?match(@.a)]",
            ErrorKind::Type,
            "match() takes 2 arguments (1 given)",
        );
    }

    #[test]
    fn test_value_parameter_rejects_node_list() {
        assert_error(
            "$[?length(@.*) > 1]",
            ErrorKind::Type,
            "length() argument 0 must be of ValueType",
        );
    }

    #[test]
    fn test_nodes_parameter_rejects_literal() {
        assert_error(
            "$[?count(1) == 1]",
            ErrorKind::Type,
            "count() argument 0 must be of NodesType",
        );
    }

    #[test]
    fn test_value_result_must_be_compared() {
        assert_error("$[?length(@.a)]", ErrorKind::Type, "result of length() must be compared");
        assert_error("$[?value(@.a)]", ErrorKind::Type, "result of value() must be compared");
    }

    #[test]
    fn test_logical_result_is_not_comparable() {
        assert_error(
            "$[?match(@.a, 'x') == true]",
            ErrorKind::Type,
            "result of match() is not comparable",
        );
        assert_error(
            "$[?count(@.*) == search(@.a, 'x')]",
            ErrorKind::Type,
            "result of search() is not comparable",
        );
    }

    #[test]
    fn test_well_typed_calls() {
        for query in [
            "$[?length(@.a) > 1]",
            "$[?count(@.*) == 2]",
            "$[?match(@.a, 'a.*')]",
            "$[?search(@.a, @.pattern)]",
            "$[?value(@..x) == 'y']",
            "$[?length(value(@.a)) == 3]",
            "$[?!match(@.a, 'b')]",
        ] {
            assert!(CompiledQuery::compile(query).is_ok(), "query should compile: {query}");
        }
    }
}

#[cfg(test)]
mod name_error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_undefined_function() {
        assert_error(
            "$[?nosuch(@.a)]",
            ErrorKind::Name,
            "function 'nosuch' is not defined",
        );
    }
}

#[cfg(test)]
mod diagnostics_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_includes_position() {
        let error = compile_error("$[]");
        assert_eq!(error.to_string(), "SyntaxError: empty segment, line 1, column 1");
    }

    #[test]
    fn test_detailed_message() {
        let error = compile_error("$[]");
        assert_eq!(
            error.detailed_message(false),
            "SyntaxError: empty segment\n -> '$[]' 1:1\n |\n1 | $[]\n |  ^ empty segment"
        );
    }

    #[test]
    fn test_detailed_message_highlight() {
        let error = compile_error("$[]");
        let message = error.detailed_message(true);
        assert!(message.ends_with("\u{1b}[1mempty segment\u{1b}[0m"));
    }

    #[test]
    fn test_caret_spans_token() {
        let error = compile_error("$.a[?nosuch(@.b)]");
        let message = error.detailed_message(false);
        let pointer_line = message.lines().last().expect("Failed to render diagnostic");
        assert_eq!(pointer_line, " |      ^^^^^^ function 'nosuch' is not defined");
    }

    #[test]
    fn test_multi_line_query_position() {
        let error = compile_error("$.a\n  .b\n  [01]");
        assert_eq!(error.line_and_column(), (3, 3));
    }

    #[test]
    fn test_empty_query() {
        let error = compile_error("");
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert_eq!(error.detailed_message(false), "empty query");
    }
}
