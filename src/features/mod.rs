//! Feature modules.

pub mod persona;
pub mod reddit;

// Re-export feature items
pub use persona::{PersonaGenerator, PersonaPrompt, TextGenerator};
pub use reddit::{extract_username, ContentItem, ContentKind, ContentSource, RedditClient};
