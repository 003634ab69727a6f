//! Go struct declaration generation
//!
//! The core of the tool: a pure, deterministic walk over a parsed JSON value
//! that emits a `type <Name> struct { ... }` declaration. Field names are the
//! JSON keys with the first character uppercased, every field carries a
//! backtick `json:"<key>"` tag with the original key verbatim, nested objects
//! become inline anonymous struct blocks, and arrays take their element type
//! from element 0 only.

pub mod naming;

use crate::error::{GenerationError, GenerationErrorKind, GenerationResult};
use crate::generation::GenerationConfig;
use naming::exported_name;
use serde_json::{Map, Value};

/// Generator for Go struct declarations
pub struct StructGenerator {
    config: GenerationConfig,
}

impl StructGenerator {
    /// Create a new generator with configuration
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Generate a declaration using the configured root struct name.
    ///
    /// The root value must be a JSON object; any other top-level shape is a
    /// [`GenerationErrorKind::NotAnObject`] error.
    pub fn generate(&self, value: &Value) -> GenerationResult<String> {
        self.generate_named(value, &self.config.root_name)
    }

    /// Generate a declaration with an explicit root struct name
    pub fn generate_named(&self, value: &Value, name: &str) -> GenerationResult<String> {
        let object = value.as_object().ok_or_else(|| {
            GenerationError::generation(GenerationErrorKind::not_an_object(json_type_name(
                value,
            )))
        })?;

        Ok(declare_struct(object, name))
    }
}

/// Emit the full declaration for a root object. Fields appear in the
/// object's insertion order, one line each, between the `type <Name> struct {`
/// header and a closing `}` line.
fn declare_struct(object: &Map<String, Value>, name: &str) -> String {
    let mut out = format!("type {} struct {{\n", name);
    for (key, value) in object {
        out.push('\t');
        out.push_str(&exported_name(key));
        out.push(' ');
        out.push_str(&go_type_at(value, 0));
        out.push(' ');
        out.push_str(&json_tag(key));
        out.push('\n');
    }
    out.push('}');
    out
}

/// Resolve the Go type text for a JSON value.
///
/// - array: `[]` + type of the FIRST element; `[]interface{}` when empty
/// - null: `interface{}` (same marker as the empty array — "no type known")
/// - string / bool: the matching primitive
/// - number: `int` when the value has no fractional component, `float64`
///   otherwise. A value-based test: `3` and `3.0` are indistinguishable once
///   parsed and both classify as `int`, while `3.5` is `float64`.
/// - object: an inline anonymous `struct { ... }` block
pub fn go_type(value: &Value) -> String {
    go_type_at(value, 0)
}

/// `depth` is the nesting depth of the field line carrying this type; field
/// lines inside a nested block are indented one tab per level below it.
fn go_type_at(value: &Value, depth: usize) -> String {
    match value {
        Value::Array(items) => match items.first() {
            Some(first) => format!("[]{}", go_type_at(first, depth)),
            None => "[]interface{}".to_string(),
        },
        Value::Null => "interface{}".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0) {
                "int".to_string()
            } else {
                "float64".to_string()
            }
        }
        Value::Bool(_) => "bool".to_string(),
        Value::Object(object) => nested_block(object, depth),
    }
}

/// Inline anonymous struct block for a nested object. No name is assigned;
/// the block itself is the field's type text.
fn nested_block(object: &Map<String, Value>, depth: usize) -> String {
    let field_indent = "\t".repeat(depth + 2);
    let lines: Vec<String> = object
        .iter()
        .map(|(key, value)| {
            format!(
                "{}{} {} {}",
                field_indent,
                exported_name(key),
                go_type_at(value, depth + 1),
                json_tag(key)
            )
        })
        .collect();

    format!(
        "struct {{\n{}\n{}}}",
        lines.join("\n"),
        "\t".repeat(depth + 1)
    )
}

/// Serialization tag carrying the original key verbatim, so a decoder can
/// recover the external form. No case transformation is applied here.
fn json_tag(key: &str) -> String {
    format!("`json:\"{}\"`", key)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
