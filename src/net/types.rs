//! Wire DTOs exchanged with the identity backend.
//!
//! DESIGN
//! ======
//! `User` is cached verbatim from the backend; the shell never edits its
//! fields. Request bodies are separate structs so password confirmation and
//! other client-only fields never leave the browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated principal as reported by the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Optional display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    /// Name to show in navigation chrome; falls back to the email address.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Fields collected by the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// `POST /login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /signup` body. The password confirmation is checked client-side only.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a SignUpFields> for SignUpRequest<'a> {
    fn from(fields: &'a SignUpFields) -> Self {
        Self { name: &fields.name, email: &fields.email, password: &fields.password }
    }
}

/// `POST /reset-password` body.
#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
}

/// Error payload returned by the backend on any rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub code: String,
}
