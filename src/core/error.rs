//! Operator-facing error types.
//!
//! Only the failure classes that map to a clean exit code 1 live here; every
//! other failure (network, API, filesystem) stays an untranslated
//! [`anyhow::Error`] and terminates with the runtime's default behavior.

use thiserror::Error;

/// Terminal, user-actionable failures. The binary prints these to stderr and
/// exits with code 1.
#[derive(Debug, Error)]
pub enum PersonaError {
    /// The profile URL has no `user` path segment followed by a username.
    #[error("Could not extract username from URL: {0}")]
    InvalidInput(String),

    /// A required environment variable is absent.
    #[error("{0}")]
    MissingConfig(String),

    /// Both listing reads came back empty.
    #[error("No content found for user {0}")]
    NoContent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PersonaError::InvalidInput("https://example.com/".to_string());
        assert_eq!(
            err.to_string(),
            "Could not extract username from URL: https://example.com/"
        );

        let err = PersonaError::NoContent("alice".to_string());
        assert_eq!(err.to_string(), "No content found for user alice");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = PersonaError::NoContent("bob".to_string()).into();
        assert!(err.is::<PersonaError>());
        match err.downcast_ref::<PersonaError>() {
            Some(PersonaError::NoContent(user)) => assert_eq!(user, "bob"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
