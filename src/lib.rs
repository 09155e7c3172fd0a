// Core layer - configuration, error types, and file utilities
pub mod core;

// Features layer - content fetching and persona generation
pub mod features;

// Application layer - the resolve -> fetch -> generate pipeline
pub mod pipeline;

// Re-export core config and errors
pub use crate::core::{Config, PersonaError};

// Re-export feature items
pub use crate::features::persona::{PersonaGenerator, PersonaPrompt, TextGenerator};
pub use crate::features::reddit::{
    extract_username, ContentItem, ContentKind, ContentSource, RedditClient,
};
