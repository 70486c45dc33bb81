//! Bearer credential injection for the remote client.
//!
//! The credential is externally owned and read-only from this crate's
//! perspective; clients receive a provider at construction time instead of
//! reading ambient storage.

use std::sync::Arc;

/// Source of the bearer token used by the remote analysis client.
pub trait CredentialProvider: Send + Sync {
    /// The current bearer token, or `None` when the user is signed out.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, for processes that receive their credential up front.
pub struct StaticCredential {
    token: String,
}

impl StaticCredential {
    /// Wrap a token string into a provider.
    pub fn new(token: impl Into<String>) -> Arc<dyn CredentialProvider> {
        Arc::new(Self {
            token: token.into(),
        })
    }
}

impl CredentialProvider for StaticCredential {
    fn bearer_token(&self) -> Option<String> {
        if self.token.is_empty() {
            None
        } else {
            Some(self.token.clone())
        }
    }
}

/// Provider for unauthenticated contexts; always reports the credential
/// as missing.
pub struct NoCredential;

impl CredentialProvider for NoCredential {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
