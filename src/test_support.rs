//! Scripted identity backend shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::net::identity::{AuthError, IdentityService};
use crate::net::types::{SignUpFields, User};
use crate::state::session::SessionStore;

/// One scripted backend answer.
pub enum Reply<T> {
    Ready(Result<T, AuthError>),
    /// Resolves when the paired sender fires.
    Deferred(oneshot::Receiver<Result<T, AuthError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, AuthError> {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(rx) => rx.await.unwrap_or_else(|_| Err(AuthError::Transport("reply dropped".to_owned()))),
        }
    }
}

/// A deferred reply plus the sender that completes it.
pub fn deferred<T>() -> (oneshot::Sender<Result<T, AuthError>>, Reply<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Deferred(rx))
}

/// Drive `store` to the session for `identity` through a backend refresh.
pub fn set_identity(svc: &ScriptedIdentity, store: &SessionStore, identity: Option<User>) {
    svc.push_current(Reply::Ready(Ok(identity)));
    futures::executor::block_on(store.refresh());
}

pub fn user(id: &str, email: &str) -> User {
    User { id: id.to_owned(), email: email.to_owned(), display_name: None }
}

/// Identity backend that answers from per-operation queues.
///
/// Empty queues fall back to: no current user, `user-not-found` for
/// login/sign-up, success for reset and logout.
#[derive(Default)]
pub struct ScriptedIdentity {
    pub current: RefCell<VecDeque<Reply<Option<User>>>>,
    pub login: RefCell<VecDeque<Reply<User>>>,
    pub sign_up: RefCell<VecDeque<Reply<User>>>,
    pub reset: RefCell<VecDeque<Reply<()>>>,
    pub logout: RefCell<VecDeque<Reply<()>>>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedIdentity {
    pub fn push_current(&self, reply: Reply<Option<User>>) {
        self.current.borrow_mut().push_back(reply);
    }

    pub fn push_login(&self, reply: Reply<User>) {
        self.login.borrow_mut().push_back(reply);
    }

    pub fn push_sign_up(&self, reply: Reply<User>) {
        self.sign_up.borrow_mut().push_back(reply);
    }

    pub fn push_reset(&self, reply: Reply<()>) {
        self.reset.borrow_mut().push_back(reply);
    }

    pub fn push_logout(&self, reply: Reply<()>) {
        self.logout.borrow_mut().push_back(reply);
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl IdentityService for ScriptedIdentity {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        self.record("current_user".to_owned());
        let reply = self.current.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Ok(None),
        }
    }

    async fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.record(format!("login:{email}"));
        let reply = self.login.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(AuthError::rejected("user-not-found")),
        }
    }

    async fn sign_up(&self, fields: &SignUpFields) -> Result<User, AuthError> {
        self.record(format!("sign_up:{}", fields.email));
        let reply = self.sign_up.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Err(AuthError::rejected("user-not-found")),
        }
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.record(format!("reset:{email}"));
        let reply = self.reset.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Ok(()),
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.record("logout".to_owned());
        let reply = self.logout.borrow_mut().pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => Ok(()),
        }
    }
}
