//! REST client for the identity backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with a transport error since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses are decoded as `{ "code": ... }`; bodies that do not parse
//! fall back to an `http-<status>` code so the alert table can still render a
//! generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::identity::{AuthError, IdentityService};
use super::types::{SignUpFields, User};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
#[cfg(feature = "csr")]
use super::types::{LoginRequest, ResetPasswordRequest, SignUpRequest};

/// Identity backend reached over HTTP under a common base path.
#[derive(Clone, Debug)]
pub struct HttpIdentityService {
    base: String,
}

impl HttpIdentityService {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_owned();
        Self { base }
    }

    fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base, path)
    }
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn status_code_fallback(status: u16) -> String {
    format!("http-{status}")
}

#[cfg(any(test, feature = "csr"))]
fn rejection_from_body(status: u16, body: Option<&str>) -> AuthError {
    body.and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .map_or_else(|| AuthError::rejected(status_code_fallback(status)), |b| AuthError::rejected(b.code))
}

#[cfg(feature = "csr")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, AuthError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.ok();
    let err = rejection_from_body(status, text.as_deref());
    log::debug!("identity request rejected: status={status}: {err}");
    Err(err)
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> AuthError {
    AuthError::Transport(e.to_string())
}

#[async_trait(?Send)]
impl IdentityService for HttpIdentityService {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("me"))
                .send()
                .await
                .map_err(transport)?;
            if resp.status() == 401 {
                return Ok(None);
            }
            let resp = check(resp).await?;
            resp.json::<Option<User>>().await.map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = self.endpoint("me");
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("login"))
                .json(&LoginRequest { email, password })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check(resp).await?.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn sign_up(&self, fields: &SignUpFields) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("signup"))
                .json(&SignUpRequest::from(fields))
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check(resp).await?.json::<User>().await.map_err(transport)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = fields;
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("reset-password"))
                .json(&ResetPasswordRequest { email })
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = email;
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint("logout"))
                .send()
                .await
                .map_err(transport)?;
            check(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }
}
