//! Compiler module tests
//!
//! Parsing, canonical rendering and query introspection

use std::sync::Arc;

use jsonp3_engine::config::JsonPathConfig;
use jsonp3_engine::jsonpath::ast::{Segment, Selector, SliceSelector, Span};
use jsonp3_engine::jsonpath::{CompiledQuery, JsonPathCompiler};
use pretty_assertions::assert_eq;

fn canonical(query: &str) -> String {
    CompiledQuery::compile(query)
        .unwrap_or_else(|e| panic!("Failed to compile '{query}': {e}"))
        .to_string()
}

#[cfg(test)]
mod parse_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shorthand_segments() {
        let query = CompiledQuery::compile("$.a.*..b").expect("Failed to compile query");
        assert_eq!(
            query.query().segments(),
            &[
                Segment::Child(vec![Selector::Name("a".to_string())]),
                Segment::Child(vec![Selector::Wildcard]),
                Segment::Descendant(vec![Selector::Name("b".to_string())], Span::default()),
            ]
        );
    }

    #[test]
    fn test_descendant_segment_span() {
        let query = CompiledQuery::compile("$.a..b..[0]").expect("Failed to compile query");
        let offsets: Vec<usize> = query
            .query()
            .segments()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Descendant(_, span) => Some(span.offset()),
                Segment::Child(_) => None,
            })
            .collect();
        assert_eq!(offsets, vec![3, 6]);
    }

    #[test]
    fn test_bracketed_selection_list() {
        let query = CompiledQuery::compile("$['a', 1, :2, 3::-1, *]").expect("Failed to compile query");
        assert_eq!(
            query.query().segments(),
            &[Segment::Child(vec![
                Selector::Name("a".to_string()),
                Selector::Index(1),
                Selector::Slice(SliceSelector::new(None, Some(2), None)),
                Selector::Slice(SliceSelector::new(Some(3), None, Some(-1))),
                Selector::Wildcard,
            ])]
        );
    }

    #[test]
    fn test_escaped_names_are_decoded() {
        let query = CompiledQuery::compile(r#"$["a\"b", 'c\'d', '☺', "😀"]"#)
            .expect("Failed to compile query");
        let names: Vec<&Selector> = query.query().segments()[0].selectors().iter().collect();
        assert_eq!(
            names,
            vec![
                &Selector::Name("a\"b".to_string()),
                &Selector::Name("c'd".to_string()),
                &Selector::Name("\u{263A}".to_string()),
                &Selector::Name("\u{1F600}".to_string()),
            ]
        );
    }

    #[test]
    fn test_root_only_query() {
        let query = CompiledQuery::compile("$").expect("Failed to compile query");
        assert!(query.is_empty());
        assert!(query.is_singular());
    }

    #[test]
    fn test_singular_queries() {
        for (source, singular) in [
            ("$.a.b", true),
            ("$['a'][0]", true),
            ("$.a[-1]", true),
            ("$.a.*", false),
            ("$..a", false),
            ("$.a[0:1]", false),
            ("$['a','b']", false),
            ("$[?@.a]", false),
        ] {
            let query = CompiledQuery::compile(source).expect("Failed to compile query");
            assert_eq!(query.is_singular(), singular, "query: {source}");
        }
    }

    #[test]
    fn test_nested_filter_in_function_argument() {
        let query = CompiledQuery::compile("$[?count(@.likes[?@.location])>3]");
        assert!(query.is_ok(), "nested filter inside count() should compile: {query:?}");

        let spaced = CompiledQuery::compile("$[? count(@.likes[? @.location]) > 3]");
        assert!(spaced.is_ok());
    }

    #[test]
    fn test_source_is_kept() {
        let query = CompiledQuery::compile("$.a.b").expect("Failed to compile query");
        assert_eq!(query.source(), "$.a.b");
    }

    #[test]
    fn test_compiler_shares_config() {
        let config = Arc::new(JsonPathConfig::default());
        let compiler = JsonPathCompiler::with_shared(Arc::clone(&config));
        let query = compiler.compile("$.a").expect("Failed to compile query");
        assert!(Arc::ptr_eq(query.config(), &config));
    }

    #[test]
    fn test_equal_queries_compare_equal() {
        let shorthand = CompiledQuery::compile("$.a[0]").expect("Failed to compile query");
        let bracketed = CompiledQuery::compile("$['a'][0]").expect("Failed to compile query");
        assert_eq!(shorthand, bracketed);
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_segments() {
        assert_eq!(canonical("$.a.b"), "$['a']['b']");
        assert_eq!(canonical("$..*"), "$..[*]");
        assert_eq!(canonical("$[1, -1]"), "$[1, -1]");
        assert_eq!(canonical("$[::2]"), "$[::2]");
        assert_eq!(canonical("$[1:3]"), "$[1:3]");
    }

    #[test]
    fn test_canonical_strings() {
        assert_eq!(canonical(r#"$["it's"]"#), r"$['it\'s']");
        assert_eq!(canonical(r#"$["a\nb"]"#), r"$['a\nb']");
        assert_eq!(canonical(r#"$["\u0001"]"#), r"$['\u0001']");
    }

    #[test]
    fn test_canonical_filters() {
        assert_eq!(canonical("$[?@.price<10]"), "$[?@['price'] < 10]");
        assert_eq!(
            canonical("$[?@.a && (@.b || @.c)]"),
            "$[?@['a'] && (@['b'] || @['c'])]"
        );
        assert_eq!(canonical("$[?(@.a && @.b) || @.c]"), "$[?@['a'] && @['b'] || @['c']]");
        assert_eq!(canonical("$[?!(@.a == 1)]"), "$[?!(@['a'] == 1)]");
        assert_eq!(
            canonical("$[?length(@.a) == value($..c)]"),
            "$[?length(@['a']) == value($..['c'])]"
        );
        assert_eq!(canonical("$[?@.a == 1.0]"), "$[?@['a'] == 1.0]");
        assert_eq!(canonical("$[?@.a == 1e2]"), "$[?@['a'] == 100]");
    }

    #[test]
    fn test_canonical_form_parses_back() {
        for source in [
            "$.store.book[?@.price < 10 && @.category == 'fiction'].title",
            "$..book[-1:]",
            "$[?search(@.name, '^a.*') || count(@.tags[*]) > 2]",
            "$[?!@.hidden]",
            "$.a['b c', \"d\\te\"]",
        ] {
            let first = CompiledQuery::compile(source).expect("Failed to compile query");
            let second = CompiledQuery::compile(&first.to_string())
                .unwrap_or_else(|e| panic!("Canonical form of '{source}' does not parse: {e}"));
            assert_eq!(first, second, "query: {source}");
            assert_eq!(first.to_string(), second.to_string());
        }
    }
}
