//! Alert dispatch and message lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and actions report outcomes through `AlertSink`. In the browser the
//! sink is `Alerts`, a signal-backed queue rendered by `AlertList`. A single
//! sweep loop sleeps until the next expiry and runs while the queue is
//! non-empty.
//!
//! ERROR HANDLING
//! ==============
//! Backend codes that have no entry in the table render a generic failure
//! message; dispatch itself never fails.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationQueue};
use crate::util::clock::now_ms;

/// Shown for any key the table does not know.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Resolve a notification key (local key or backend error code) to display text.
///
/// Firebase-style `auth/` prefixes are ignored.
pub fn message_for(key: &str) -> &'static str {
    let key = key.strip_prefix("auth/").unwrap_or(key);
    match key {
        "mail-sent" => "Mail sent successfully!",
        "login-success" => "Logged in successfully.",
        "signup-success" => "Account created. Welcome!",
        "logout-success" => "Logged out.",
        "user-not-found" => "No account exists for that email.",
        "wrong-password" => "Incorrect password.",
        "invalid-credential" => "Invalid email or password.",
        "email-in-use" | "email-already-in-use" => "An account already exists for that email.",
        "weak-password" => "Password should be at least 6 characters.",
        "invalid-email" => "Enter a valid email address.",
        "too-many-requests" => "Too many attempts. Try again later.",
        "network-request-failed" => "Network error. Check your connection.",
        _ => GENERIC_FAILURE_MESSAGE,
    }
}

/// Destination for operation outcomes.
pub trait AlertSink {
    fn show(&self, kind: NotificationKind, message_key: &str);
}

impl AlertSink for RefCell<NotificationQueue> {
    fn show(&self, kind: NotificationKind, message_key: &str) {
        self.borrow_mut().show_at(kind, message_key, now_ms());
    }
}

/// Signal-backed notification queue provided via context.
#[derive(Clone, Copy, Debug)]
pub struct Alerts {
    queue: RwSignal<NotificationQueue>,
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    sweeping: RwSignal<bool>,
}

impl Alerts {
    pub fn new(ttl_ms: u64) -> Self {
        Self { queue: RwSignal::new(NotificationQueue::new(ttl_ms)), sweeping: RwSignal::new(false) }
    }

    /// Reactive read handle for rendering.
    pub fn queue(&self) -> RwSignal<NotificationQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: crate::state::notifications::NotificationId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Expire due alerts and return the delay until the next sweep.
    #[cfg(any(test, feature = "csr"))]
    fn sweep(&self, now_ms: u64) -> Option<u64> {
        self.queue.try_update(|q| q.sweep(now_ms)).flatten()
    }

    #[cfg(feature = "csr")]
    fn start_sweeping(self) {
        if self.sweeping.get_untracked() {
            return;
        }
        self.sweeping.set(true);
        leptos::task::spawn_local(async move {
            while let Some(delay) = self.sweep(now_ms()) {
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            }
            self.sweeping.set(false);
        });
    }
}

impl AlertSink for Alerts {
    fn show(&self, kind: NotificationKind, message_key: &str) {
        log::debug!("alert {kind:?}: {message_key}");
        self.queue.update(|q| {
            q.show_at(kind, message_key, now_ms());
        });

        #[cfg(feature = "csr")]
        self.start_sweeping();
    }
}

/// Show an alert through the `Alerts` context.
pub fn show_alert(kind: NotificationKind, message_key: &str) {
    expect_context::<Alerts>().show(kind, message_key);
}
