//! Error types for analysis clients.
//!
//! The `Display` text of each variant is the user-facing message the hosting
//! view shows; server-supplied detail is preferred over generic wording.

use thiserror::Error;

/// Errors that can occur when submitting an image for analysis.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// No bearer credential is available, or the service rejected the one
    /// we sent. Never includes credential details.
    #[error("Authentication required. Please sign in again")]
    MissingCredential,

    /// The request never produced a usable response (connect, timeout,
    /// unreadable body).
    #[error("Error uploading image. Please try again")]
    TransportFailure(String),

    /// The service answered with a non-success status.
    #[error("{detail}")]
    ServerRejected {
        /// Server-supplied detail when parseable, generic message otherwise.
        detail: String,
    },
}

impl AnalysisError {
    /// Fallback detail used when an error response carries no `detail` field.
    pub const GENERIC_REJECTION: &'static str = "Error uploading image. Please try again";

    /// Whether a user-initiated retry with the same file could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AnalysisError::TransportFailure(_))
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::TransportFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_rejected_displays_detail() {
        let err = AnalysisError::ServerRejected {
            detail: "Unsupported image type".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported image type");
    }

    #[test]
    fn test_missing_credential_message_prompts_sign_in() {
        assert!(AnalysisError::MissingCredential
            .to_string()
            .contains("sign in"));
    }

    #[test]
    fn test_only_transport_failures_are_retryable() {
        assert!(AnalysisError::TransportFailure("timeout".into()).is_retryable());
        assert!(!AnalysisError::MissingCredential.is_retryable());
        assert!(!AnalysisError::ServerRejected {
            detail: "bad file".into()
        }
        .is_retryable());
    }
}
