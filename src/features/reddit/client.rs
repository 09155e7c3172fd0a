//! Reddit data API client.
//!
//! Application-only OAuth2 (client credentials grant) plus the two user
//! listing endpoints this tool needs. No retry and no rate-limit backoff:
//! transport and API errors propagate to the caller and end the run.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::core::config::Config;
use crate::features::reddit::models::{CommentData, ContentItem, Listing, SubmissionData};
use crate::features::reddit::ContentSource;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

/// Endpoint for the application-only token exchange.
const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URL for authenticated API reads.
const OAUTH_API_BASE: &str = "https://oauth.reddit.com";

/// Reddit caps listing pages at 100 items.
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
}

/// Authenticated client for Reddit's public data API.
pub struct RedditClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl RedditClient {
    /// Build a client from configuration. No network call happens here; the
    /// token is acquired lazily on the first fetch.
    pub fn new(config: &Config) -> Self {
        RedditClient {
            http: reqwest::Client::new(),
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
        }
    }

    /// Exchange the app credentials for a bearer token.
    async fn access_token(&self) -> Result<String> {
        debug!("Requesting application-only access token");

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Reddit token request failed with HTTP {status}"));
        }

        let token: AccessToken = response.json().await?;
        Ok(token.access_token)
    }

    /// Read one listing endpoint page by page until `limit` items are mapped
    /// or the `after` cursor runs out.
    async fn fetch_listing<T>(
        &self,
        token: &str,
        username: &str,
        endpoint: &str,
        limit: u32,
        map: fn(T) -> ContentItem,
    ) -> Result<Vec<ContentItem>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{OAUTH_API_BASE}/user/{username}/{endpoint}");
        let mut items: Vec<ContentItem> = Vec::new();
        let mut after: Option<String> = None;

        while (items.len() as u32) < limit {
            let page_size = next_page_size(items.len(), limit);

            let mut request = self
                .http
                .get(&url)
                .bearer_auth(token)
                .header(reqwest::header::USER_AGENT, &self.user_agent)
                .query(&[("sort", "new"), ("raw_json", "1")])
                .query(&[("limit", page_size.to_string())]);
            if let Some(cursor) = &after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(anyhow!(
                    "Reddit API returned HTTP {status} for /user/{username}/{endpoint}"
                ));
            }

            let listing: Listing<T> = response.json().await?;
            let page_len = listing.data.children.len();
            for child in listing.data.children {
                items.push(map(child.data));
            }

            debug!(
                "Fetched {page_len} items from /user/{username}/{endpoint} ({} total)",
                items.len()
            );

            after = listing.data.after;
            if after.is_none() || page_len == 0 {
                break;
            }
        }

        items.truncate(limit as usize);
        Ok(items)
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn fetch_user_content(&self, username: &str, limit: u32) -> Result<Vec<ContentItem>> {
        let token = self.access_token().await?;

        let mut content = self
            .fetch_listing(&token, username, "comments", limit, CommentData::into_item)
            .await?;
        let comment_count = content.len();

        let submissions = self
            .fetch_listing(&token, username, "submitted", limit, SubmissionData::into_item)
            .await?;
        let submission_count = submissions.len();
        content.extend(submissions);

        info!(
            "Fetched {comment_count} comments and {submission_count} submissions for u/{username}"
        );
        Ok(content)
    }
}

/// Size of the next page request: the items still needed, capped at
/// Reddit's per-page maximum.
fn next_page_size(fetched: usize, limit: u32) -> u32 {
    limit.saturating_sub(fetched as u32).min(MAX_PAGE_SIZE)
}
