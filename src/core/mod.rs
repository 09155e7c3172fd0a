//! # Core Module
//!
//! Core domain types, configuration, and error handling for the persona tool.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config, error, and file_utils modules

pub mod config;
pub mod error;
pub mod file_utils;

// Re-export commonly used items
pub use config::Config;
pub use error::PersonaError;
pub use file_utils::{default_output_path, write_persona_file};
