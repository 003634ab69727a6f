//! JSON input acquisition and parsing

pub mod directory;

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::PathBuf;

/// Where the JSON document comes from
#[derive(Debug, Clone)]
pub enum JsonSource {
    /// Raw JSON text passed inline
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Directory containing multiple JSON files
    Directory(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
            JsonSource::Directory(_) => Err(ParseError::new(
                "Cannot parse directory as single JSON value".to_string(),
                None,
            )),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Directory(path) => format!("directory: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            JsonSource::String(_) | JsonSource::Stdin => true,
            JsonSource::File(path) => path.exists() && path.is_file(),
            JsonSource::Directory(path) => path.exists() && path.is_dir(),
        }
    }

    /// Get the estimated size of the source in bytes (if known)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::String(s) => Some(s.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            // Unknown until read / enumerated
            JsonSource::Directory(_) | JsonSource::Stdin => None,
        }
    }
}

/// Parse JSON from a string
fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON string".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = Some((e.line(), e.column()));
        ParseError::new(format!("Invalid JSON: {}", e), location)
            .with_preview(error_preview(trimmed, e.line(), e.column()))
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &PathBuf) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(format!("Failed to read file: {}", e), None))?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(buffer.trim())
}

/// Render the offending line with a caret under the reported column
fn error_preview(content: &str, line: usize, column: usize) -> String {
    let Some(error_line) = content.lines().nth(line.saturating_sub(1)) else {
        return "Context not available".to_string();
    };

    let caret_offset = column.saturating_sub(1).min(error_line.len());
    format!("{}\n{}^", error_line, " ".repeat(caret_offset))
}
