//! Orchestration of input validation, generation and metadata collection

use crate::error::{GenerationError, GenerationErrorKind, GenerationResult};
use crate::generation::config::GenerationConfig;
use crate::generator::naming::{find_collisions, Collision};
use crate::generator::StructGenerator;
use crate::parser::JsonSource;
use serde_json::Value;
use std::time::Instant;

/// A generated declaration plus details about how it was produced
#[derive(Debug, Clone)]
pub struct GoStructData {
    pub content: String,
    pub metadata: GenerationMetadata,
}

impl GoStructData {
    pub fn new(content: String, metadata: GenerationMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the generated declaration text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the generation process
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    pub input_size: u64,
    pub output_size: u64,
    /// Field lines across the whole declaration, nested blocks included
    pub field_count: usize,
    /// Deepest nesting level observed in the input
    pub max_depth: usize,
    pub processing_time_ms: u64,
    /// Keys that capitalize to the same field name (output left untouched)
    pub collisions: Vec<Collision>,
}

/// Main generation engine
pub struct GenerationEngine {
    config: GenerationConfig,
}

impl GenerationEngine {
    /// Create a new generation engine
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Generate a Go struct declaration for a parsed JSON value
    pub fn generate(&self, json_data: &Value) -> GenerationResult<GoStructData> {
        let start_time = Instant::now();

        self.validate_input(json_data)?;

        let generator = StructGenerator::new(self.config.clone());
        let content = generator.generate(json_data)?;

        let collisions = if self.config.detect_collisions {
            json_data
                .as_object()
                .map(find_collisions)
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let metadata = GenerationMetadata {
            input_size: estimate_input_size(json_data),
            output_size: content.len() as u64,
            field_count: count_fields(json_data),
            max_depth: measure_depth(json_data),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
            collisions,
        };

        Ok(GoStructData::new(content, metadata))
    }

    /// Generate from a JSON source (string, file or stdin)
    pub fn generate_from_source(&self, source: &JsonSource) -> GenerationResult<GoStructData> {
        if let Some(size) = source.estimated_size() {
            if size > self.config.size_limit as u64 {
                return Err(GenerationError::generation(
                    GenerationErrorKind::InputTooLarge {
                        size: size as usize,
                        limit: self.config.size_limit,
                    },
                ));
            }
        }

        let json_value = source.parse().map_err(GenerationError::ParseError)?;
        self.generate(&json_value)
    }

    /// Generate from a raw JSON string
    pub fn generate_string(&self, json_str: &str) -> GenerationResult<GoStructData> {
        let source = JsonSource::String(json_str.to_string());
        self.generate_from_source(&source)
    }

    /// Validate input against the configured guards
    fn validate_input(&self, json_data: &Value) -> GenerationResult<()> {
        self.config.validate().map_err(|e| {
            GenerationError::generation(GenerationErrorKind::configuration(e))
        })?;

        let depth = measure_depth(json_data);
        if depth > self.config.max_depth {
            return Err(GenerationError::generation(
                GenerationErrorKind::DepthExceeded {
                    depth,
                    limit: self.config.max_depth,
                },
            ));
        }

        Ok(())
    }
}

/// Estimate input size in bytes from the parsed value
fn estimate_input_size(json_data: &Value) -> u64 {
    match json_data {
        Value::String(s) => s.len() as u64 + 2,
        Value::Number(n) => n.to_string().len() as u64,
        Value::Bool(_) => 5,
        Value::Null => 4,
        Value::Array(a) => 2 + a.iter().map(estimate_input_size).sum::<u64>() + a.len() as u64,
        Value::Object(o) => {
            2 + o
                .iter()
                .map(|(k, v)| k.len() as u64 + 4 + estimate_input_size(v))
                .sum::<u64>()
        }
    }
}

/// Count the field lines the declaration will contain
fn count_fields(json_data: &Value) -> usize {
    match json_data {
        Value::Object(object) => object
            .iter()
            .map(|(_, value)| 1 + count_nested_fields(value))
            .sum(),
        _ => 0,
    }
}

fn count_nested_fields(value: &Value) -> usize {
    match value {
        Value::Object(_) => count_fields(value),
        // Only element 0 contributes to the declaration
        Value::Array(items) => items.first().map_or(0, count_nested_fields),
        _ => 0,
    }
}

/// Measure the deepest nesting level of a value tree
fn measure_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(measure_depth).max().unwrap_or(0),
        Value::Object(object) => 1 + object.values().map(measure_depth).max().unwrap_or(0),
        _ => 0,
    }
}

/// Generate a declaration with explicit configuration
pub fn generate_go_struct(
    json_data: &Value,
    config: &GenerationConfig,
) -> GenerationResult<GoStructData> {
    let engine = GenerationEngine::new(config.clone());
    engine.generate(json_data)
}

/// Generate from a source with explicit configuration
pub fn generate_from_source(
    source: &JsonSource,
    config: &GenerationConfig,
) -> GenerationResult<GoStructData> {
    let engine = GenerationEngine::new(config.clone());
    engine.generate_from_source(source)
}

/// Generate from a raw JSON string with explicit configuration
pub fn generate_string(
    json_str: &str,
    config: &GenerationConfig,
) -> GenerationResult<GoStructData> {
    let engine = GenerationEngine::new(config.clone());
    engine.generate_string(json_str)
}
