//! # Persona Generation Feature
//!
//! Turn a user's fetched content into a persona description with per-trait
//! URL citations, via a single chat-completion call.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with prompt builder and OpenAI generator

pub mod generator;
pub mod prompt_builder;

pub use generator::PersonaGenerator;
pub use prompt_builder::PersonaPrompt;

use anyhow::Result;
use async_trait::async_trait;

/// Capability interface for "complete this prompt" providers.
///
/// The pipeline depends on this trait rather than on [`PersonaGenerator`],
/// so tests can assert on the exact prompt and skip the network entirely.
#[async_trait]
pub trait TextGenerator {
    /// Produce the persona text for an assembled prompt, whitespace-trimmed.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
