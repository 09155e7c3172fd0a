//! Content records and Reddit API wire types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL used to turn permalinks into absolute web addresses.
pub const REDDIT_WEB_BASE: &str = "https://www.reddit.com";

// ============================================================================
// Normalized content records
// ============================================================================

/// Kind of content item, serialized lowercase (`comment` / `post`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Comment,
    Post,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Comment => write!(f, "comment"),
            ContentKind::Post => write!(f, "post"),
        }
    }
}

/// One normalized piece of user content used as generation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub text: String,
    pub url: String,
}

// ============================================================================
// Listing envelope
// ============================================================================

/// Reddit's Listing envelope: `{"kind": "Listing", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    /// Cursor for the next page; `None` when the listing is exhausted.
    pub after: Option<String>,
    pub children: Vec<Thing<T>>,
}

/// A `Thing` wrapper (`t1_` comments, `t3_` submissions) around item data.
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub data: T,
}

// ============================================================================
// Item payloads
// ============================================================================

/// Fields of a `t1` comment child used by this tool.
#[derive(Debug, Deserialize)]
pub struct CommentData {
    pub body: String,
    pub permalink: String,
}

impl CommentData {
    /// Normalize into a [`ContentItem`] with an absolute permalink URL.
    pub fn into_item(self) -> ContentItem {
        ContentItem {
            kind: ContentKind::Comment,
            text: self.body,
            url: format!("{REDDIT_WEB_BASE}{}", self.permalink),
        }
    }
}

/// Fields of a `t3` submission child used by this tool.
#[derive(Debug, Deserialize)]
pub struct SubmissionData {
    pub title: String,
    /// Empty for link posts.
    #[serde(default)]
    pub selftext: String,
    /// External link for link posts; for self-posts Reddit sets this to the
    /// permalink-shaped relative path or the full comments URL.
    #[serde(default)]
    pub url: String,
    pub permalink: String,
}

impl SubmissionData {
    /// Normalize into a [`ContentItem`].
    ///
    /// `text` is always `"<title>\n\n<selftext>"`, keeping the blank line even
    /// when the selftext is empty. `url` is the submission's external link
    /// when it starts with a web scheme, else the constructed permalink.
    pub fn into_item(self) -> ContentItem {
        let url = if self.url.starts_with("http") {
            self.url
        } else {
            format!("{REDDIT_WEB_BASE}{}", self.permalink)
        };

        ContentItem {
            kind: ContentKind::Post,
            text: format!("{}\n\n{}", self.title, self.selftext),
            url,
        }
    }
}
