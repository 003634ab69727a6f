//! Unit tests for nested structures: inline anonymous structs and arrays

use json2go::generation::{generate_string, GenerationConfig};
use pretty_assertions::assert_eq;

#[cfg(test)]
mod nested_generation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generate(json_str: &str) -> String {
        generate_string(json_str, &GenerationConfig::default())
            .unwrap()
            .content
    }

    /// Nested objects become inline anonymous struct blocks
    #[test]
    fn test_single_level_nesting() {
        let content = generate(r#"{"a": {"b": 1}}"#);
        let expected = "type MyStruct struct {\n\
                        \tA struct {\n\
                        \t\tB int `json:\"b\"`\n\
                        \t} `json:\"a\"`\n\
                        }";
        assert_eq!(content, expected);
    }

    /// Each nesting level indents one tab further
    #[test]
    fn test_two_level_nesting() {
        let content = generate(r#"{"user": {"profile": {"bio": "hi"}}}"#);
        let expected = "type MyStruct struct {\n\
                        \tUser struct {\n\
                        \t\tProfile struct {\n\
                        \t\t\tBio string `json:\"bio\"`\n\
                        \t\t} `json:\"profile\"`\n\
                        \t} `json:\"user\"`\n\
                        }";
        assert_eq!(content, expected);
    }

    /// Nested blocks carry their own tags with the original keys
    #[test]
    fn test_nested_fields_carry_tags() {
        let content = generate(r#"{"outer": {"innerKey": true}}"#);
        assert!(content.contains("`json:\"outer\"`"));
        assert!(content.contains("\t\tInnerKey bool `json:\"innerKey\"`"));
    }

    /// Arrays of primitives become slices of the first element's type
    #[test]
    fn test_primitive_arrays() {
        let content = generate(r#"{"tags": ["a", "b"], "ids": [1, 2, 3]}"#);
        assert!(content.contains("\tTags []string `json:\"tags\"`"));
        assert!(content.contains("\tIds []int `json:\"ids\"`"));
    }

    /// Arrays of objects inline the first element's struct
    #[test]
    fn test_array_of_objects() {
        let content = generate(r#"{"users": [{"id": 1, "name": "Alice"}]}"#);
        let expected = "type MyStruct struct {\n\
                        \tUsers []struct {\n\
                        \t\tId int `json:\"id\"`\n\
                        \t\tName string `json:\"name\"`\n\
                        \t} `json:\"users\"`\n\
                        }";
        assert_eq!(content, expected);
    }

    /// Nested arrays compose
    #[test]
    fn test_nested_arrays() {
        let content = generate(r#"{"matrix": [[1, 2], [3, 4]]}"#);
        assert!(content.contains("\tMatrix [][]int `json:\"matrix\"`"));
    }

    /// Mixed tree with objects inside arrays inside objects
    #[test]
    fn test_mixed_tree() {
        let content = generate(
            r#"{"data": {"items": [{"price": 9.99, "meta": {"sku": "x"}}]}}"#,
        );
        let expected = "type MyStruct struct {\n\
                        \tData struct {\n\
                        \t\tItems []struct {\n\
                        \t\t\tPrice float64 `json:\"price\"`\n\
                        \t\t\tMeta struct {\n\
                        \t\t\t\tSku string `json:\"sku\"`\n\
                        \t\t\t} `json:\"meta\"`\n\
                        \t\t} `json:\"items\"`\n\
                        \t} `json:\"data\"`\n\
                        }";
        assert_eq!(content, expected);
    }
}
