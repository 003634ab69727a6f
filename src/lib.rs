//! JSON to Go Struct Converter
//!
//! A Rust CLI tool and library for converting JSON documents into Go struct
//! type declarations: field names capitalized, primitive types inferred,
//! nested objects rendered as inline anonymous structs, arrays as slices of
//! the first element's type, and every field tagged with its original key.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod error;
pub mod generation;
pub mod generator;
pub mod parser;

// Re-export commonly used types
pub use error::{GenerationError, GenerationErrorKind, ParseError, INVALID_JSON_SENTINEL};
pub use generation::{generate_go_struct, GenerationConfig, GenerationEngine, GoStructData};
pub use generator::StructGenerator;
pub use parser::JsonSource;

/// Generate a Go struct declaration with default configuration
pub fn generate_struct(json: &serde_json::Value) -> Result<String, GenerationError> {
    let config = GenerationConfig::default();
    generate_struct_with_config(json, &config)
}

/// Generate a Go struct declaration with custom configuration
pub fn generate_struct_with_config(
    json: &serde_json::Value,
    config: &GenerationConfig,
) -> Result<String, GenerationError> {
    let result = generate_go_struct(json, config)?;
    Ok(result.content)
}
