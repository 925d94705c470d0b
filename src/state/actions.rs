//! Call-site handlers for user-triggered identity operations.
//!
//! ERROR HANDLING
//! ==============
//! Every `AuthError` is caught here and forwarded as an error alert; nothing
//! propagates into rendering. Superseded responses are dropped silently since
//! a newer request already reported its own outcome. Form fields are owned by
//! the page and are left untouched on failure so the user can retry.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::cell::Cell;

use leptos::prelude::*;

use crate::net::identity::AuthError;
use crate::net::types::SignUpFields;
use crate::state::notifications::NotificationKind;
use crate::state::session::{Session, SessionStore};
use crate::util::alerts::AlertSink;

/// An "operation in progress" flag owned by a form.
pub trait Pending {
    fn set_pending(&self, pending: bool);
}

impl Pending for Cell<bool> {
    fn set_pending(&self, pending: bool) {
        self.set(pending);
    }
}

impl Pending for RwSignal<bool> {
    fn set_pending(&self, pending: bool) {
        self.set(pending);
    }
}

fn report_failure(alerts: &impl AlertSink, err: &AuthError) {
    match err.code() {
        Some(code) => alerts.show(NotificationKind::Error, code),
        None => log::debug!("dropping superseded auth response"),
    }
}

/// # Errors
///
/// Returns the store's `AuthError` after it has been reported.
pub async fn login(
    store: &SessionStore,
    alerts: &impl AlertSink,
    pending: &impl Pending,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    pending.set_pending(true);
    let result = store.login(email, password).await;
    pending.set_pending(false);
    match &result {
        Ok(_) => alerts.show(NotificationKind::Success, "login-success"),
        Err(e) => report_failure(alerts, e),
    }
    result
}

/// # Errors
///
/// Returns the store's `AuthError` after it has been reported.
pub async fn sign_up(
    store: &SessionStore,
    alerts: &impl AlertSink,
    pending: &impl Pending,
    fields: SignUpFields,
) -> Result<Session, AuthError> {
    pending.set_pending(true);
    let result = store.sign_up(fields).await;
    pending.set_pending(false);
    match &result {
        Ok(_) => alerts.show(NotificationKind::Success, "signup-success"),
        Err(e) => report_failure(alerts, e),
    }
    result
}

/// Send a reset mail. The in-progress flag stays set after success so the
/// same address is not mailed twice; it clears on failure.
///
/// # Errors
///
/// Returns the store's `AuthError` after it has been reported.
pub async fn reset_password(
    store: &SessionStore,
    alerts: &impl AlertSink,
    pending: &impl Pending,
    email: &str,
) -> Result<(), AuthError> {
    pending.set_pending(true);
    let result = store.reset_password(email).await;
    match &result {
        Ok(()) => alerts.show(NotificationKind::Success, "mail-sent"),
        Err(e) => {
            pending.set_pending(false);
            report_failure(alerts, e);
        }
    }
    result
}

pub async fn logout(store: &SessionStore, alerts: &impl AlertSink) {
    store.logout().await;
    alerts.show(NotificationKind::Success, "logout-success");
}
