//! Configuration options for struct generation

/// Default root struct name when none is supplied
pub const DEFAULT_ROOT_NAME: &str = "MyStruct";

/// Generation configuration options
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Name of the generated root struct
    pub root_name: String,
    /// Maximum nesting depth accepted before generation is refused
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub size_limit: usize,
    /// Report keys that capitalize to the same field name
    pub detect_collisions: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            max_depth: 1000,
            size_limit: 100 * 1024 * 1024, // 100MB
            detect_collisions: true,
        }
    }
}

impl GenerationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a custom root struct name
    pub fn with_root_name(name: impl Into<String>) -> Self {
        Self {
            root_name: name.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.root_name.is_empty() {
            return Err("Root struct name must not be empty".to_string());
        }
        if !is_go_identifier(&self.root_name) {
            return Err(format!(
                "Root struct name '{}' is not a valid Go identifier",
                self.root_name
            ));
        }
        if self.max_depth == 0 {
            return Err("Maximum nesting depth must be greater than 0".to_string());
        }
        if self.size_limit == 0 {
            return Err("Input size limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Go identifiers: letters/underscore, then letters/digits/underscores.
/// Field names derived from JSON keys are deliberately NOT held to this rule;
/// only the user-supplied root name is.
fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
