//! JSON to Go struct generation module
//!
//! This module contains the orchestration engine, configuration, and
//! statistics around the core generator.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{GenerationConfig, DEFAULT_ROOT_NAME};
pub use engine::{
    generate_from_source, generate_go_struct, generate_string, GenerationEngine, GoStructData,
};
pub use stats::GenerationStatistics;
