use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::test_support::{Reply, ScriptedIdentity, deferred, set_identity, user};

fn store_with(svc: &Rc<ScriptedIdentity>) -> SessionStore {
    SessionStore::new(svc.clone())
}

fn anonymous_store() -> (Rc<ScriptedIdentity>, SessionStore) {
    let svc = Rc::new(ScriptedIdentity::default());
    let store = store_with(&svc);
    set_identity(&svc, &store, None);
    (svc, store)
}

fn record_statuses(store: &SessionStore) -> Rc<RefCell<Vec<Session>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.borrow_mut().push(s.clone()));
    seen
}

// =============================================================
// Session invariant
// =============================================================

#[test]
fn session_constructors_keep_identity_iff_authenticated() {
    let cases = [
        Session::unknown(),
        Session::anonymous(),
        Session::authenticating(),
        Session::authenticated(user("u1", "a@b.com")),
        Session::from_identity(None),
        Session::from_identity(Some(user("u2", "c@d.com"))),
    ];
    for s in cases {
        assert_eq!(s.is_authenticated(), s.identity().is_some(), "{s:?}");
    }
}

#[test]
fn default_session_is_unknown() {
    assert_eq!(Session::default().status(), SessionStatus::Unknown);
    assert!(!Session::default().is_resolved());
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn new_store_is_unknown() {
    let svc = Rc::new(ScriptedIdentity::default());
    assert_eq!(store_with(&svc).current().status(), SessionStatus::Unknown);
}

#[test]
fn initialize_with_user_authenticates() {
    let svc = Rc::new(ScriptedIdentity::default());
    svc.push_current(Reply::Ready(Ok(Some(user("u1", "a@b.com")))));
    let store = store_with(&svc);
    let session = block_on(store.initialize());
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.identity().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn initialize_without_user_is_anonymous() {
    let svc = Rc::new(ScriptedIdentity::default());
    let store = store_with(&svc);
    assert_eq!(block_on(store.initialize()).status(), SessionStatus::Anonymous);
}

#[test]
fn initialize_transport_failure_resolves_anonymous() {
    let svc = Rc::new(ScriptedIdentity::default());
    svc.push_current(Reply::Ready(Err(AuthError::Transport("offline".to_owned()))));
    let store = store_with(&svc);
    assert_eq!(block_on(store.initialize()).status(), SessionStatus::Anonymous);
}

#[test]
fn late_initialize_does_not_overwrite_login() {
    let svc = Rc::new(ScriptedIdentity::default());
    let (tx, reply) = deferred();
    svc.push_current(reply);
    svc.push_login(Reply::Ready(Ok(user("u1", "a@b.com"))));
    let store = store_with(&svc);

    let mut init = store.initialize();
    assert!((&mut init).now_or_never().is_none());
    block_on(store.login("a@b.com", "pw")).unwrap();

    tx.send(Ok(None)).unwrap();
    let session = block_on(init);
    assert!(session.is_authenticated());
}

// =============================================================
// Login / sign-up / logout
// =============================================================

#[test]
fn login_success_authenticates_and_notifies_in_order() {
    let (svc, store) = anonymous_store();
    svc.push_login(Reply::Ready(Ok(user("u1", "a@b.com"))));
    let seen = record_statuses(&store);

    let session = block_on(store.login("a@b.com", "pw")).unwrap();

    assert!(session.is_authenticated());
    let statuses: Vec<_> = seen.borrow().iter().map(Session::status).collect();
    assert_eq!(statuses, vec![SessionStatus::Authenticating, SessionStatus::Authenticated]);
}

#[test]
fn login_failure_returns_code_and_reverts_to_anonymous() {
    let (svc, store) = anonymous_store();
    svc.push_login(Reply::Ready(Err(AuthError::rejected("wrong-password"))));

    let err = block_on(store.login("a@b.com", "bad")).unwrap_err();

    assert_eq!(err.code(), Some("wrong-password"));
    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn sign_up_success_authenticates_immediately() {
    let (svc, store) = anonymous_store();
    svc.push_sign_up(Reply::Ready(Ok(user("u9", "new@b.com"))));
    let fields = SignUpFields {
        name: "New".to_owned(),
        email: "new@b.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    };
    let session = block_on(store.sign_up(fields)).unwrap();
    assert_eq!(session.identity().map(|u| u.email.as_str()), Some("new@b.com"));
    assert_eq!(svc.calls.borrow().last().map(String::as_str), Some("sign_up:new@b.com"));
}

#[test]
fn sign_up_email_in_use_keeps_anonymous() {
    let (svc, store) = anonymous_store();
    svc.push_sign_up(Reply::Ready(Err(AuthError::rejected("email-in-use"))));
    let err = block_on(store.sign_up(SignUpFields::default())).unwrap_err();
    assert_eq!(err.code(), Some("email-in-use"));
    assert_eq!(store.current().status(), SessionStatus::Anonymous);
}

#[test]
fn logout_clears_session() {
    let (svc, store) = anonymous_store();
    svc.push_login(Reply::Ready(Ok(user("u1", "a@b.com"))));
    block_on(store.login("a@b.com", "pw")).unwrap();

    block_on(store.logout());

    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn logout_succeeds_locally_when_backend_fails() {
    let (svc, store) = anonymous_store();
    set_identity(&svc, &store, Some(user("u1", "a@b.com")));
    svc.push_logout(Reply::Ready(Err(AuthError::Transport("offline".to_owned()))));

    block_on(store.logout());

    assert_eq!(store.current().status(), SessionStatus::Anonymous);
}

#[test]
fn reset_password_never_mutates_session() {
    let (svc, store) = anonymous_store();
    svc.push_reset(Reply::Ready(Err(AuthError::rejected("user-not-found"))));
    let seen = record_statuses(&store);

    assert!(block_on(store.reset_password("valid@example.com")).is_err());
    assert!(block_on(store.reset_password("valid@example.com")).is_ok());

    assert!(seen.borrow().is_empty());
    assert_eq!(store.current(), Session::anonymous());
}

#[test]
fn refresh_picks_up_revoked_identity() {
    let (svc, store) = anonymous_store();
    set_identity(&svc, &store, Some(user("u1", "a@b.com")));
    set_identity(&svc, &store, None);
    assert_eq!(store.current().status(), SessionStatus::Anonymous);
}

#[test]
fn failed_refresh_keeps_current_session() {
    let (svc, store) = anonymous_store();
    set_identity(&svc, &store, Some(user("u1", "a@b.com")));
    svc.push_current(Reply::Ready(Err(AuthError::Transport("offline".to_owned()))));

    let after = block_on(store.refresh());

    assert!(after.is_authenticated());
    assert_eq!(store.current().identity().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn refresh_resolving_after_newer_login_is_discarded() {
    let (svc, store) = anonymous_store();
    let (tx, reply) = deferred();
    svc.push_current(reply);
    svc.push_login(Reply::Ready(Ok(user("u1", "a@b.com"))));

    let refresh = store.refresh();
    block_on(store.login("a@b.com", "pw")).unwrap();
    tx.send(Ok(None)).unwrap();
    let after = block_on(refresh);

    assert!(after.is_authenticated());
}

// =============================================================
// Concurrent requests
// =============================================================

#[test]
fn stale_login_response_is_discarded() {
    let (svc, store) = anonymous_store();
    let (tx_first, first_reply) = deferred();
    let (tx_second, second_reply) = deferred();
    svc.push_login(first_reply);
    svc.push_login(second_reply);

    let mut first = store.login("a@b.com", "pw");
    let mut second = store.login("b@b.com", "pw");
    assert!((&mut first).now_or_never().is_none());
    assert!((&mut second).now_or_never().is_none());

    tx_second.send(Ok(user("b", "b@b.com"))).unwrap();
    assert!(block_on(second).is_ok());
    tx_first.send(Ok(user("a", "a@b.com"))).unwrap();

    assert_eq!(block_on(first).unwrap_err(), AuthError::Superseded);
    assert_eq!(store.current().identity().map(|u| u.id.as_str()), Some("b"));
}

#[test]
fn in_order_resolutions_are_all_applied() {
    let (svc, store) = anonymous_store();
    let (tx_first, first_reply) = deferred();
    let (tx_second, second_reply) = deferred();
    svc.push_login(first_reply);
    svc.push_login(second_reply);
    let seen = record_statuses(&store);

    let mut first = store.login("a@b.com", "pw");
    let mut second = store.login("b@b.com", "pw");
    assert!((&mut first).now_or_never().is_none());
    assert!((&mut second).now_or_never().is_none());

    tx_first.send(Ok(user("a", "a@b.com"))).unwrap();
    block_on(first).unwrap();
    tx_second.send(Ok(user("b", "b@b.com"))).unwrap();
    block_on(second).unwrap();

    let ids: Vec<_> = seen.borrow().iter().filter_map(|s| s.identity().map(|u| u.id.clone())).collect();
    assert_eq!(ids, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn newer_failure_keeps_earlier_success() {
    let (svc, store) = anonymous_store();
    let (tx_first, first_reply) = deferred();
    let (tx_second, second_reply) = deferred();
    svc.push_login(first_reply);
    svc.push_login(second_reply);

    let mut first = store.login("a@b.com", "pw");
    let mut second = store.login("b@b.com", "bad");
    assert!((&mut first).now_or_never().is_none());
    assert!((&mut second).now_or_never().is_none());

    tx_first.send(Ok(user("a", "a@b.com"))).unwrap();
    block_on(first).unwrap();
    tx_second.send(Err(AuthError::rejected("wrong-password"))).unwrap();
    assert!(block_on(second).is_err());

    assert_eq!(store.current().identity().map(|u| u.id.as_str()), Some("a"));
}

#[test]
fn logout_during_login_wins() {
    let (svc, store) = anonymous_store();
    let (tx, reply) = deferred();
    svc.push_login(reply);

    let mut login = store.login("a@b.com", "pw");
    assert!((&mut login).now_or_never().is_none());
    block_on(store.logout());
    tx.send(Ok(user("a", "a@b.com"))).unwrap();

    assert_eq!(block_on(login).unwrap_err(), AuthError::Superseded);
    assert_eq!(store.current(), Session::anonymous());
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn unsubscribe_stops_notifications() {
    let (svc, store) = anonymous_store();
    let seen = Rc::new(RefCell::new(0));
    let sink = seen.clone();
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    set_identity(&svc, &store, Some(user("u1", "a@b.com")));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    set_identity(&svc, &store, None);

    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn listener_may_read_store_during_notification() {
    let (svc, store) = anonymous_store();
    let observed = Rc::new(RefCell::new(None));
    let sink = observed.clone();
    let reader = store.clone();
    store.subscribe(move |_| *sink.borrow_mut() = Some(reader.current().status()));

    set_identity(&svc, &store, Some(user("u1", "a@b.com")));

    assert_eq!(*observed.borrow(), Some(SessionStatus::Authenticated));
}

#[test]
fn every_notified_session_upholds_invariant() {
    let (svc, store) = anonymous_store();
    svc.push_login(Reply::Ready(Err(AuthError::rejected("wrong-password"))));
    svc.push_login(Reply::Ready(Ok(user("u1", "a@b.com"))));
    let seen = record_statuses(&store);

    let _ = block_on(store.login("a@b.com", "bad"));
    let _ = block_on(store.login("a@b.com", "pw"));
    block_on(store.logout());

    assert!(!seen.borrow().is_empty());
    for s in seen.borrow().iter() {
        assert_eq!(s.is_authenticated(), s.identity().is_some());
        assert!(s.is_resolved());
    }
}
