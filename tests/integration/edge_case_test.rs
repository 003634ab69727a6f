//! Edge cases: documented limitations, shape errors and the sentinel policy

use assert_matches::assert_matches;
use json2go::error::{GenerationError, GenerationErrorKind, INVALID_JSON_SENTINEL};
use json2go::generation::{generate_string, GenerationConfig, GenerationEngine};
use serde_json::json;

fn generate(json_str: &str) -> String {
    generate_string(json_str, &GenerationConfig::default())
        .unwrap()
        .content
}

#[test]
fn test_sentinel_string_is_fixed() {
    assert_eq!(INVALID_JSON_SENTINEL, "Error: Invalid JSON input");
}

#[test]
fn test_malformed_input_replaces_output() {
    let err = generate_string("\"{not json", &GenerationConfig::default()).unwrap_err();
    assert!(err.replaces_output());
    assert_matches!(err, GenerationError::ParseError(_));
}

#[test]
fn test_non_object_roots_are_shape_errors() {
    for (input, found) in [
        ("[1, 2, 3]", "an array"),
        ("\"hello\"", "a string"),
        ("42", "a number"),
        ("true", "a boolean"),
        ("null", "null"),
    ] {
        let err = generate_string(input, &GenerationConfig::default()).unwrap_err();
        assert!(err.replaces_output(), "input {:?}", input);
        assert_matches!(
            err,
            GenerationError::Generation {
                kind: GenerationErrorKind::NotAnObject { found: f },
                ..
            } if f == found
        );
    }
}

/// Heterogeneous arrays take the type of element 0 only — a documented
/// limitation, preserved rather than merged away.
#[test]
fn test_heterogeneous_array_uses_first_element() {
    let content = generate(r#"{"mixed": [1, "x", true]}"#);
    assert!(content.contains("\tMixed []int `json:\"mixed\"`"));

    let content = generate(r#"{"mixed": ["x", 1]}"#);
    assert!(content.contains("\tMixed []string `json:\"mixed\"`"));
}

/// Array-of-objects: later elements' extra fields are ignored
#[test]
fn test_array_of_objects_ignores_later_shapes() {
    let content = generate(r#"{"rows": [{"a": 1}, {"a": 1, "b": 2}]}"#);
    assert!(content.contains("\t\tA int `json:\"a\"`"));
    assert!(!content.contains("\"b\""));
}

/// Empty-string key: uppercasing is a no-op, the field name is empty and the
/// tag is `json:""`.
#[test]
fn test_empty_string_key() {
    let content = generate(r#"{"": 1}"#);
    assert!(content.contains("\t int `json:\"\"`"));
}

/// Keys colliding after capitalization both survive in the output, and the
/// engine reports the collision in metadata.
#[test]
fn test_capitalization_collision_preserved_and_reported() {
    let engine = GenerationEngine::new(GenerationConfig::default());
    let data = engine.generate(&json!({"a": 1, "A": "x"})).unwrap();

    assert!(data.content.contains("\tA int `json:\"a\"`"));
    assert!(data.content.contains("\tA string `json:\"A\"`"));

    assert_eq!(data.metadata.collisions.len(), 1);
    assert_eq!(data.metadata.collisions[0].keys, vec!["a", "A"]);
}

/// Keys that are not valid Go identifiers pass through unsanitized
#[test]
fn test_unsanitized_keys_pass_through() {
    let content = generate(r#"{"1st": 1, "with space": 2, "has-dash": 3}"#);
    assert!(content.contains("\t1st int `json:\"1st\"`"));
    assert!(content.contains("\tWith space int `json:\"with space\"`"));
    assert!(content.contains("\tHas-dash int `json:\"has-dash\"`"));
}

/// Large whole floats classify as int by the value-based test
#[test]
fn test_large_whole_float_is_int() {
    let content = generate(r#"{"big": 1e3}"#);
    assert!(content.contains("\tBig int `json:\"big\"`"));
}

/// Deep nesting beyond the configured limit is refused with a typed error,
/// not a sentinel
#[test]
fn test_depth_limit_is_typed_error() {
    let config = GenerationConfig {
        max_depth: 3,
        ..Default::default()
    };
    let err = generate_string(r#"{"a": {"b": {"c": {"d": 1}}}}"#, &config).unwrap_err();
    assert!(!err.replaces_output());
    assert_matches!(
        err,
        GenerationError::Generation {
            kind: GenerationErrorKind::DepthExceeded { .. },
            ..
        }
    );
}
