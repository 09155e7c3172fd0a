//! Process configuration loaded once at startup.
//!
//! All environment lookups happen here; the rest of the crate receives an
//! explicit [`Config`] and never reads the process environment itself.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::core::error::PersonaError;
use anyhow::Result;
use std::env;

/// User-Agent sent with every Reddit API request when none is configured.
pub const DEFAULT_USER_AGENT: &str = "reddit-persona-script/0.1";

/// Chat model used when OPENAI_MODEL is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

/// Runtime configuration for the persona tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`, `OPENAI_API_KEY`.
    /// Optional: `REDDIT_USER_AGENT`, `OPENAI_MODEL`, `LOG_LEVEL`.
    ///
    /// Missing required variables produce a [`PersonaError::MissingConfig`],
    /// which the binary maps to exit code 1 before any network call is made.
    pub fn from_env() -> Result<Self> {
        let reddit_client_id = non_empty_var("REDDIT_CLIENT_ID");
        let reddit_client_secret = non_empty_var("REDDIT_CLIENT_SECRET");

        let (reddit_client_id, reddit_client_secret) =
            match (reddit_client_id, reddit_client_secret) {
                (Some(id), Some(secret)) => (id, secret),
                _ => {
                    return Err(PersonaError::MissingConfig(
                        "Please set REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET environment variables."
                            .to_string(),
                    )
                    .into())
                }
            };

        let openai_api_key = non_empty_var("OPENAI_API_KEY").ok_or_else(|| {
            PersonaError::MissingConfig(
                "Please set OPENAI_API_KEY environment variable.".to_string(),
            )
        })?;

        Ok(Config {
            reddit_client_id,
            reddit_client_secret,
            reddit_user_agent: non_empty_var("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            openai_api_key,
            openai_model: non_empty_var("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            log_level: non_empty_var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so all scenarios run inside a
    // single test function to keep them sequential.
    #[test]
    fn test_config_from_env() {
        env::remove_var("REDDIT_CLIENT_ID");
        env::remove_var("REDDIT_CLIENT_SECRET");
        env::remove_var("REDDIT_USER_AGENT");
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_MODEL");
        env::remove_var("LOG_LEVEL");

        // Missing Reddit credentials
        let err = Config::from_env().unwrap_err();
        assert!(err.is::<PersonaError>());
        assert!(err.to_string().contains("REDDIT_CLIENT_ID"));

        // One credential alone is not enough
        env::set_var("REDDIT_CLIENT_ID", "id123");
        assert!(Config::from_env().is_err());

        // Reddit credentials present, OpenAI key missing
        env::set_var("REDDIT_CLIENT_SECRET", "secret456");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        // Empty string counts as unset
        env::set_var("OPENAI_API_KEY", "");
        assert!(Config::from_env().is_err());

        // Fully configured, defaults applied
        env::set_var("OPENAI_API_KEY", "sk-test");
        let config = Config::from_env().unwrap();
        assert_eq!(config.reddit_client_id, "id123");
        assert_eq!(config.reddit_client_secret, "secret456");
        assert_eq!(config.reddit_user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.log_level, "info");

        // Optional overrides
        env::set_var("REDDIT_USER_AGENT", "my-agent/2.0");
        env::set_var("OPENAI_MODEL", "gpt-4-turbo");
        env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.reddit_user_agent, "my-agent/2.0");
        assert_eq!(config.openai_model, "gpt-4-turbo");
        assert_eq!(config.log_level, "debug");

        env::remove_var("REDDIT_CLIENT_ID");
        env::remove_var("REDDIT_CLIENT_SECRET");
        env::remove_var("REDDIT_USER_AGENT");
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_MODEL");
        env::remove_var("LOG_LEVEL");
    }
}
