//! Profile URL parsing.

use crate::core::error::PersonaError;
use anyhow::Result;

/// Extract the username from a Reddit profile URL.
///
/// Trailing slashes are stripped, the path is split on `/`, and the segment
/// following the literal `user` segment is returned. Works for both
/// `https://www.reddit.com/user/<name>` and `https://old.reddit.com/user/<name>/`
/// style URLs.
pub fn extract_username(url: &str) -> Result<String> {
    let parts: Vec<&str> = url.trim_end_matches('/').split('/').collect();

    if let Some(idx) = parts.iter().position(|segment| *segment == "user") {
        if let Some(username) = parts.get(idx + 1) {
            if !username.is_empty() {
                return Ok((*username).to_string());
            }
        }
    }

    Err(PersonaError::InvalidInput(url.to_string()).into())
}
