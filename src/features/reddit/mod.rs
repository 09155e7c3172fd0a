//! # Reddit Content Feature
//!
//! Resolve a profile URL to a username and fetch that user's most recent
//! public comments and submissions through the Reddit data API, normalized
//! into [`ContentItem`] records for persona generation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with URL resolver, OAuth2 app-only client, and
//!   paginated comment/submission listings

pub mod client;
pub mod models;
pub mod url;

pub use client::RedditClient;
pub use models::{ContentItem, ContentKind};
pub use url::extract_username;

use anyhow::Result;
use async_trait::async_trait;

/// Capability interface for anything that can produce a user's content.
///
/// The pipeline depends on this trait rather than on [`RedditClient`]
/// directly, so tests substitute in-memory fakes and a different platform
/// client could be dropped in without touching pipeline logic.
#[async_trait]
pub trait ContentSource {
    /// Fetch up to `limit` comments and `limit` submissions for `username`,
    /// comments first, each newest-first.
    async fn fetch_user_content(&self, username: &str, limit: u32) -> Result<Vec<ContentItem>>;
}
