//! Error types and handling infrastructure for JSON to Go struct generation

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Fixed output shown in place of a declaration when the input is not usable.
///
/// Replaces the whole visible result; the underlying error detail stays on
/// the diagnostic side.
pub const INVALID_JSON_SENTINEL: &str = "Error: Invalid JSON input";

/// Core error types for the generation process
#[derive(Debug, thiserror::Error)]
pub enum GenerationErrorKind {
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        location: Option<(usize, usize)>,
    },

    #[error("top-level JSON value is {found}, expected an object")]
    NotAnObject { found: &'static str },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("JSON too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Nesting too deep: {depth} levels (limit: {limit})")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Generation failed: {message}")]
    GenerationFailed { message: String },
}

impl GenerationErrorKind {
    pub fn json_parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::JsonParse { message, location }
    }

    pub fn not_an_object(found: &'static str) -> Self {
        Self::NotAnObject { found }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for generation operations
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Generation {
        kind: GenerationErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl GenerationError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn generation(kind: GenerationErrorKind) -> Self {
        Self::Generation { kind, source: None }
    }

    pub fn generation_with_source(kind: GenerationErrorKind, source: anyhow::Error) -> Self {
        Self::Generation {
            kind,
            source: Some(source),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// True when the user-visible output should be replaced with the
    /// [`INVALID_JSON_SENTINEL`] string instead of a declaration.
    pub fn replaces_output(&self) -> bool {
        match self {
            Self::ParseError(_) => true,
            Self::Generation { kind, .. } => {
                matches!(kind, GenerationErrorKind::NotAnObject { .. })
            }
            Self::Other(_) => false,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Generation { kind, .. } => match kind {
                GenerationErrorKind::NotAnObject { found } => {
                    format!(
                        "Top-level JSON value is {}; a struct declaration needs an object",
                        found
                    )
                }
                GenerationErrorKind::InputTooLarge { size, limit } => {
                    format!("JSON input too large: {} bytes (limit: {} bytes)", size, limit)
                }
                GenerationErrorKind::DepthExceeded { depth, limit } => {
                    format!("JSON nesting too deep: {} levels (limit: {})", depth, limit)
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
