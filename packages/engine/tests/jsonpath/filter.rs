//! Filter selector tests
//!
//! Existence tests, comparison semantics and logical operators

use std::sync::Arc;

use jsonp3_engine::config::JsonPathConfig;
use jsonp3_engine::jsonpath::CompiledQuery;
use jsonp3_engine::jsonpath::filter::json_eq;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn paths(query: &str, doc: &Value) -> Vec<String> {
    CompiledQuery::compile(query)
        .unwrap_or_else(|e| panic!("Failed to compile '{query}': {e}"))
        .find(doc)
        .expect("Failed to evaluate query")
        .paths()
}

fn indices(query: &str, doc: &Value) -> Vec<usize> {
    CompiledQuery::compile(query)
        .unwrap_or_else(|e| panic!("Failed to compile '{query}': {e}"))
        .find(doc)
        .expect("Failed to evaluate query")
        .iter()
        .filter_map(|node| node.location().last())
        .filter_map(|element| match element {
            jsonp3_engine::jsonpath::PathElement::Index(index) => Some(index),
            jsonp3_engine::jsonpath::PathElement::Name(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod existence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_exists() {
        let doc = json!([{"a": 1}, {"b": 2}, {"a": null}, {"a": false}]);
        assert_eq!(indices("$[?@.a]", &doc), vec![0, 2, 3]);
        assert_eq!(indices("$[?!@.a]", &doc), vec![1]);
    }

    #[test]
    fn test_filter_on_object_members() {
        let doc = json!({"x": {"keep": true}, "y": {}, "z": {"keep": 0}});
        assert_eq!(paths("$[?@.keep]", &doc), vec!["$['x']", "$['z']"]);
    }

    #[test]
    fn test_filter_on_scalar_selects_nothing() {
        assert!(paths("$[?@.a]", &json!(1)).is_empty());
    }

    #[test]
    fn test_current_node_test() {
        let doc = json!([1, [], {}, null]);
        assert_eq!(indices("$[?@]", &doc), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_root_query_existence() {
        let doc = json!({"flag": true, "items": [1, 2]});
        assert_eq!(paths("$.items[?$.flag]", &doc).len(), 2);
        assert!(paths("$.items[?$.missing]", &doc).is_empty());
    }

    #[test]
    fn test_nested_filter() {
        let doc = json!([
            {"likes": [{"location": "a"}, {"location": "b"}, {"location": "c"}, {"location": "d"}]},
            {"likes": [{"location": "a"}, {}]},
        ]);
        assert_eq!(indices("$[?count(@.likes[?@.location])>3]", &doc), vec![0]);
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_comparisons() {
        let doc = json!([{"n": 1}, {"n": 2.5}, {"n": 3}, {"n": "3"}, {}]);
        assert_eq!(indices("$[?@.n > 1]", &doc), vec![1, 2]);
        assert_eq!(indices("$[?@.n >= 1]", &doc), vec![0, 1, 2]);
        assert_eq!(indices("$[?@.n < 3]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.n <= 2.5]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.n == 3]", &doc), vec![2]);
        assert_eq!(indices("$[?@.n != 3]", &doc), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_int_equals_float() {
        let doc = json!([{"n": 1}, {"n": 1.0}, {"n": 1.5}]);
        assert_eq!(indices("$[?@.n == 1.0]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.n == 1]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.n == 10e-1]", &doc), vec![0, 1]);
    }

    #[test]
    fn test_string_comparisons() {
        let doc = json!([{"s": "a"}, {"s": "b"}, {"s": "ab"}, {"s": 1}]);
        assert_eq!(indices("$[?@.s < 'b']", &doc), vec![0, 2]);
        assert_eq!(indices("$[?@.s == \"ab\"]", &doc), vec![2]);
    }

    #[test]
    fn test_mixed_types_do_not_order() {
        let doc = json!([{"v": "1"}, {"v": true}, {"v": null}, {"v": [1]}]);
        assert!(indices("$[?@.v < 2]", &doc).is_empty());
        assert!(indices("$[?@.v > 0]", &doc).is_empty());
        assert_eq!(indices("$[?@.v <= null]", &doc), vec![2]);
    }

    #[test]
    fn test_null_and_missing_are_distinct() {
        let doc = json!([{"a": null}, {}]);
        assert_eq!(indices("$[?@.a == null]", &doc), vec![0]);
        assert_eq!(indices("$[?@.a != null]", &doc), vec![1]);
    }

    #[test]
    fn test_missing_equals_missing() {
        let doc = json!([{"a": 1}, {"b": 1}]);
        assert_eq!(indices("$[?@.x == @.y]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.a == @.y]", &doc), vec![1]);
    }

    #[test]
    fn test_deep_equality() {
        let doc = json!({
            "items": [{"v": [1, {"k": 2}]}, {"v": [1, {"k": 3}]}],
            "want": [1, {"k": 2.0}]
        });
        assert_eq!(paths("$.items[?@.v == $.want]", &doc), vec!["$['items'][0]"]);
    }

    #[test]
    fn test_booleans() {
        let doc = json!([{"b": true}, {"b": false}, {"b": 1}]);
        assert_eq!(indices("$[?@.b == true]", &doc), vec![0]);
        assert_eq!(indices("$[?@.b == false]", &doc), vec![1]);
    }

    #[test]
    fn test_literal_comparison() {
        let doc = json!([1, 2]);
        assert_eq!(indices("$[?1 == 1]", &doc), vec![0, 1]);
        assert!(indices("$[?'a' > 'b']", &doc).is_empty());
    }

    #[test]
    fn test_json_eq() {
        assert!(json_eq(&json!(1), &json!(1.0)));
        assert!(json_eq(&json!({"a": [1, 2]}), &json!({"a": [1.0, 2]})));
        assert!(!json_eq(&json!([1, 2]), &json!([2, 1])));
        assert!(!json_eq(&json!("1"), &json!(1)));
        assert!(json_eq(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!json_eq(&json!(-1), &json!(u64::MAX)));
    }
}

#[cfg(test)]
mod logical_operator_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_and_or_precedence() {
        let doc = json!([
            {"a": 1, "b": 1, "c": 0},
            {"a": 1, "b": 0, "c": 1},
            {"a": 0, "b": 0, "c": 1},
            {"a": 0, "b": 1, "c": 0},
        ]);
        assert_eq!(indices("$[?@.a == 1 && @.b == 1 || @.c == 1]", &doc), vec![0, 1, 2]);
        assert_eq!(indices("$[?@.a == 1 && (@.b == 1 || @.c == 1)]", &doc), vec![0, 1]);
        assert_eq!(indices("$[?@.c == 1 || @.a == 1 && @.b == 1]", &doc), vec![0, 1, 2]);
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        let doc = json!([{"a": 1}, {"b": 1}, {"a": 1, "b": 1}]);
        assert_eq!(indices("$[?!@.a && @.b]", &doc), vec![1]);
        assert_eq!(indices("$[?!(@.a && @.b)]", &doc), vec![0, 1]);
    }

    #[test]
    fn test_short_circuit_skips_right_operand() {
        let config = JsonPathConfig::builder()
            .strict_regex(true)
            .build()
            .expect("Failed to build config");
        let query = CompiledQuery::compile_with("$[?@.a == 'x' || match(@.a, @.p)]", Arc::new(config))
            .expect("Failed to compile query");

        // In strict mode the invalid pattern fails if match() is ever called.
        let doc = json!([{"a": "x", "p": "("}, {"a": "y"}]);
        let nodes = query.find(&doc).expect("Failed to evaluate query");
        assert_eq!(nodes.paths(), vec!["$[0]"]);
    }
}

#[cfg(test)]
mod root_and_relative_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_with_root_value() {
        let doc = json!({"limit": 2, "items": [1, 2, 3]});
        assert_eq!(paths("$.items[?@ > $.limit]", &doc), vec!["$['items'][2]"]);
    }

    #[test]
    fn test_value_of_descendant_query() {
        let doc = json!({"c": "cd", "values": [{"a": "ab"}, {"c": "d"}, {"a": null}]});
        // $..c selects two nodes, so value() is Nothing and only the
        // elements whose length() is also Nothing match.
        assert_eq!(
            paths("$.values[?length(@.a)==value($..c)]", &doc),
            vec!["$['values'][1]", "$['values'][2]"]
        );
    }

    #[test]
    fn test_value_of_singular_descendant() {
        let doc = json!({"c": "cd", "values": [{"a": "ab"}, {"a": "abc"}]});
        assert_eq!(
            paths("$.values[?length(@.a)==length(value($..c))]", &doc),
            vec!["$['values'][0]"]
        );
    }
}
