//! # Persona Pipeline
//!
//! Sequences the run: fetch the user's content, refuse to continue on an
//! empty result, assemble the prompt, generate the persona. Depends only on
//! the [`ContentSource`] and [`TextGenerator`] capabilities so that tests
//! drive it with in-memory fakes.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

use crate::core::error::PersonaError;
use crate::features::persona::{PersonaPrompt, TextGenerator};
use crate::features::reddit::ContentSource;
use anyhow::Result;
use log::info;

/// Run the fetch -> prompt -> generate sequence for one user.
///
/// Returns the generated persona text; writing it out is the caller's job.
/// A run with zero fetched items fails with [`PersonaError::NoContent`]
/// before the generator is ever invoked.
pub async fn run_pipeline<S, G>(
    source: &S,
    generator: &G,
    username: &str,
    limit: u32,
) -> Result<String>
where
    S: ContentSource + Sync,
    G: TextGenerator + Sync,
{
    info!("Fetching up to {limit} comments and {limit} submissions for u/{username}");
    let items = source.fetch_user_content(username, limit).await?;

    if items.is_empty() {
        return Err(PersonaError::NoContent(username.to_string()).into());
    }

    let prompt = PersonaPrompt::new(username, &items).build();
    let persona = generator.generate(&prompt).await?;

    Ok(persona)
}
