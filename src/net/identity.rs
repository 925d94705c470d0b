//! Identity backend seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store talks to the backend only through `IdentityService`, so
//! the browser REST client and test doubles are interchangeable.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure collapses to `AuthError`. `code()` yields the key the
//! alert table resolves to a user-facing message; a superseded response has
//! no code because it is never shown.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use super::types::{SignUpFields, User};

/// Code used for network/connectivity failures.
pub const TRANSPORT_CODE: &str = "network-request-failed";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the request (bad credentials, unknown account, ...).
    #[error("identity service rejected request: {code}")]
    Rejected { code: String },
    /// The request never produced a backend verdict.
    #[error("identity service unreachable: {0}")]
    Transport(String),
    /// A newer session-mutating request already resolved.
    #[error("superseded by a newer request")]
    Superseded,
}

impl AuthError {
    pub fn rejected(code: impl Into<String>) -> Self {
        Self::Rejected { code: code.into() }
    }

    /// Notification key for this error, or `None` for `Superseded`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code } => Some(code),
            Self::Transport(_) => Some(TRANSPORT_CODE),
            Self::Superseded => None,
        }
    }
}

/// Asynchronous identity backend.
///
/// Futures are `?Send`: the shell runs on the single browser event loop.
#[async_trait(?Send)]
pub trait IdentityService {
    /// Resolve the identity for the current token, if any.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn sign_up(&self, fields: &SignUpFields) -> Result<User, AuthError>;

    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}
