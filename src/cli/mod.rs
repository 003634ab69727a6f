//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GenerationError, GenerationErrorKind, GenerationResult};
use crate::generation::GenerationConfig;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "json2go")]
#[command(about = "Convert JSON documents into Go struct type declarations")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON source (inline JSON, file, or directory)
    #[arg()]
    pub input: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read JSON from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Name of the generated root struct (default: MyStruct)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Maximum accepted nesting depth (default: 1000)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub size_limit: Option<String>,

    /// Suppress field-name collision warnings
    #[arg(long)]
    pub no_collision_warnings: bool,

    /// Only validate JSON, don't generate
    #[arg(long)]
    pub validate_only: bool,

    /// Output generation statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue generating for other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub generation_config: GenerationConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> GenerationResult<Self> {
        let generation_config = Self::create_generation_config(&args)?;

        Ok(Self {
            args,
            generation_config,
        })
    }

    /// Create generation configuration from CLI arguments
    fn create_generation_config(args: &Args) -> GenerationResult<GenerationConfig> {
        let size_limit = parse_size_limit(&args.size_limit)?;

        let config = GenerationConfig {
            root_name: args
                .name
                .clone()
                .unwrap_or_else(|| crate::generation::DEFAULT_ROOT_NAME.to_string()),
            max_depth: args.max_depth.unwrap_or(1000),
            size_limit,
            detect_collisions: !args.no_collision_warnings,
        };

        config.validate().map_err(|e| {
            GenerationError::generation(GenerationErrorKind::configuration(e))
        })?;

        Ok(config)
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse size limit string (e.g., "100MB", "1GB", "500KB")
fn parse_size_limit(limit: &Option<String>) -> GenerationResult<usize> {
    match limit {
        None => Ok(100 * 1024 * 1024), // 100MB default
        Some(limit_str) => {
            let limit_str = limit_str.trim().to_uppercase();
            let invalid = || {
                GenerationError::generation(GenerationErrorKind::Configuration {
                    message: format!("Invalid size limit: {}", limit_str),
                })
            };

            if let Some(size) = limit_str.strip_suffix("GB") {
                let gb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((gb * 1024.0 * 1024.0 * 1024.0) as usize)
            } else if let Some(size) = limit_str.strip_suffix("MB") {
                let mb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((mb * 1024.0 * 1024.0) as usize)
            } else if let Some(size) = limit_str.strip_suffix("KB") {
                let kb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((kb * 1024.0) as usize)
            } else if let Some(size) = limit_str.strip_suffix('B') {
                size.parse::<usize>().map_err(|_| invalid())
            } else {
                // Assume bytes
                limit_str.parse::<usize>().map_err(|_| invalid())
            }
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        if let Ok(style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Get the terminal size
    pub fn get_terminal_size() -> (u16, u16) {
        terminal_size::terminal_size()
            .map(|(width, height)| (width.0, height.0))
            .unwrap_or((80, 24))
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &GenerationError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    if error.to_string().contains("JSON parse error") {
        eprintln!("\nTip: Use --validate-only to check JSON syntax before generation");
    } else if error.to_string().contains("too large") {
        eprintln!("\nTip: Use --size-limit to increase the input size allowance");
    } else if error.to_string().contains("too deep") {
        eprintln!("\nTip: Use --max-depth to raise the nesting depth limit");
    }

    eprintln!("\nTry 'json2go --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, GenerationError>;
