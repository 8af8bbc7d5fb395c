//! Domain error types for SIX EYES.
//!
//! These errors represent domain-level failures that can occur while talking
//! to the optimizer or persisting history. The diff itself never fails and
//! therefore has no error type.

use thiserror::Error;

/// Errors raised while parsing a language label.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language: {0}")]
    Unsupported(String),
}

/// Errors raised by the code-optimization collaborator.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Code and language are required")]
    MissingInput,

    #[error("AI service not configured: {0}")]
    NotConfigured(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits to continue.")]
    CreditsExhausted,

    #[error("AI gateway error (status {status}): {body}")]
    Gateway { status: u16, body: String },

    #[error("Invalid AI response format: {0}")]
    InvalidReply(String),

    #[error("Optimization request failed: {0}")]
    Transport(String),

    #[error("Optimization failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Errors raised while loading or saving the optimization history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History file unavailable at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("History could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glue_failures_become_operation_failed() {
        let err: OptimizeError = anyhow::anyhow!("rendering prompt failed").into();
        assert!(matches!(err, OptimizeError::OperationFailed(_)));
        assert_eq!(err.to_string(), "Optimization failed: rendering prompt failed");
    }

    #[test]
    fn test_history_io_error_names_the_path() {
        let err = HistoryError::Io {
            path: "/tmp/history.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("History file unavailable at /tmp/history.json"));
    }
}
