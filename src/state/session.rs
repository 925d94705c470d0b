//! Auth-session state and its single writer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` wraps the identity backend and owns the one `Session` value
//! for the app's lifetime. Route gates and pages read it; only the store
//! mutates it.
//!
//! DESIGN
//! ======
//! Every session-mutating call takes a ticket when it is called. A resolution
//! is applied only if its ticket is newer than the last applied one, so a slow
//! response can never overwrite a newer outcome. Subscribers are notified
//! synchronously, in resolution order, after the interior borrow is released.
//!
//! Returned futures own a clone of the store, so a completion that lands after
//! the invoking view is gone still settles the session safely.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::net::identity::{AuthError, IdentityService};
use crate::net::types::{SignUpFields, User};

/// Where the session stands relative to the identity backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No answer from the backend yet.
    #[default]
    Unknown,
    /// A login or sign-up is in flight from an anonymous session.
    Authenticating,
    Authenticated,
    Anonymous,
}

/// The app's current view of who is signed in.
///
/// Constructors keep `status == Authenticated` iff an identity is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<User>,
    status: SessionStatus,
}

impl Session {
    #[must_use]
    pub const fn unknown() -> Self {
        Self { identity: None, status: SessionStatus::Unknown }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self { identity: None, status: SessionStatus::Anonymous }
    }

    #[must_use]
    pub const fn authenticating() -> Self {
        Self { identity: None, status: SessionStatus::Authenticating }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { identity: Some(user), status: SessionStatus::Authenticated }
    }

    /// Authenticated with `user`, anonymous without.
    #[must_use]
    pub fn from_identity(user: Option<User>) -> Self {
        user.map_or_else(Self::anonymous, Self::authenticated)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated)
    }

    /// True once the backend has answered at least once.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self.status, SessionStatus::Unknown)
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    session: Session,
    /// Last ticket handed out.
    issued: u64,
    /// Ticket of the last resolution written to `session`.
    applied: u64,
    next_listener: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Single writer of the app's `Session`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    service: Rc<dyn IdentityService>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SessionStore")
            .field("session", &inner.session)
            .field("issued", &inner.issued)
            .field("applied", &inner.applied)
            .field("listeners", &inner.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(service: Rc<dyn IdentityService>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session: Session::unknown(),
                issued: 0,
                applied: 0,
                next_listener: 0,
                listeners: Vec::new(),
            })),
            service,
        }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn current(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// Register `listener` for every applied session update.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Resolve the startup session from the backend.
    ///
    /// A backend failure resolves to anonymous; the app must leave `Unknown`.
    pub fn initialize(&self) -> LocalBoxFuture<'static, Session> {
        let store = self.clone();
        let ticket = self.issue();
        async move {
            let next = match store.service.current_user().await {
                Ok(user) => Session::from_identity(user),
                Err(e) => {
                    log::warn!("session resolution failed, continuing anonymous: {e}");
                    Session::anonymous()
                }
            };
            store.apply(ticket, next);
            store.current()
        }
        .boxed_local()
    }

    /// Re-resolve the identity after startup, picking up expiry or revocation
    /// on the backend. Unlike `initialize`, a failed check keeps the current
    /// session.
    pub fn refresh(&self) -> LocalBoxFuture<'static, Session> {
        let store = self.clone();
        let ticket = self.issue();
        async move {
            match store.service.current_user().await {
                Ok(user) => {
                    store.apply(ticket, Session::from_identity(user));
                }
                Err(e) => log::debug!("identity refresh failed, keeping session: {e}"),
            }
            store.current()
        }
        .boxed_local()
    }

    /// # Errors
    ///
    /// Returns the backend's `AuthError`, or `Superseded` if a newer request
    /// resolved first.
    pub fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, Result<Session, AuthError>> {
        let store = self.clone();
        let ticket = self.begin_authenticating();
        let (email, password) = (email.to_owned(), password.to_owned());
        async move {
            let result = store.service.login(&email, &password).await;
            store.settle(ticket, result)
        }
        .boxed_local()
    }

    /// Create an account and authenticate with it immediately.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`], plus backend codes such as `email-in-use`.
    pub fn sign_up(&self, fields: SignUpFields) -> LocalBoxFuture<'static, Result<Session, AuthError>> {
        let store = self.clone();
        let ticket = self.begin_authenticating();
        async move {
            let result = store.service.sign_up(&fields).await;
            store.settle(ticket, result)
        }
        .boxed_local()
    }

    /// Ask the backend to mail a reset link. Never touches the session.
    ///
    /// # Errors
    ///
    /// Returns the backend's `AuthError` (e.g. `user-not-found`).
    pub fn reset_password(&self, email: &str) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let service = Rc::clone(&self.service);
        let email = email.to_owned();
        async move { service.reset_password(&email).await }.boxed_local()
    }

    /// Sign out. Always succeeds locally; a backend failure is only logged.
    pub fn logout(&self) -> LocalBoxFuture<'static, ()> {
        let store = self.clone();
        let ticket = self.issue();
        async move {
            if let Err(e) = store.service.logout().await {
                log::warn!("backend logout failed, clearing session locally: {e}");
            }
            store.apply(ticket, Session::anonymous());
        }
        .boxed_local()
    }

    fn issue(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.issued += 1;
        inner.issued
    }

    fn begin_authenticating(&self) -> u64 {
        let ticket = self.issue();
        let entered = {
            let mut inner = self.inner.borrow_mut();
            if inner.session.status == SessionStatus::Anonymous {
                inner.session = Session::authenticating();
                true
            } else {
                false
            }
        };
        if entered {
            self.notify();
        }
        ticket
    }

    fn settle(&self, ticket: u64, result: Result<User, AuthError>) -> Result<Session, AuthError> {
        match result {
            Ok(user) => {
                if self.apply(ticket, Session::authenticated(user)) {
                    Ok(self.current())
                } else {
                    Err(AuthError::Superseded)
                }
            }
            Err(e) => {
                self.settle_failure(ticket);
                Err(e)
            }
        }
    }

    /// A failed login only leaves `Authenticating` when it was the newest
    /// request and nothing newer has resolved.
    fn settle_failure(&self, ticket: u64) {
        let reverted = {
            let mut inner = self.inner.borrow_mut();
            if ticket > inner.applied
                && ticket == inner.issued
                && inner.session.status == SessionStatus::Authenticating
            {
                inner.applied = ticket;
                inner.session = Session::anonymous();
                true
            } else {
                false
            }
        };
        if reverted {
            self.notify();
        }
    }

    /// Write `next` if `ticket` is newer than the last applied resolution.
    fn apply(&self, ticket: u64, next: Session) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if ticket <= inner.applied {
                log::debug!("discarding stale session resolution: ticket={ticket} applied={}", inner.applied);
                return false;
            }
            inner.applied = ticket;
            log::debug!("session {:?} -> {:?} (ticket={ticket})", inner.session.status, next.status);
            inner.session = next;
        }
        self.notify();
        true
    }

    fn notify(&self) {
        let (session, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.session.clone(), listeners)
        };
        for listener in listeners {
            listener(&session);
        }
    }
}
