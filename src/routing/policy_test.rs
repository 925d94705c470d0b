use super::*;
use crate::test_support::user;

fn all_sessions() -> Vec<Session> {
    vec![
        Session::unknown(),
        Session::anonymous(),
        Session::authenticating(),
        Session::authenticated(user("u1", "a@b.com")),
    ]
}

#[test]
fn protected_renders_only_when_authenticated() {
    for session in all_sessions() {
        let decision = authorize(AccessLevel::Protected, &session);
        if session.is_authenticated() {
            assert_eq!(decision, GateDecision::Render);
        } else {
            assert_ne!(decision, GateDecision::Render, "{session:?}");
        }
    }
}

#[test]
fn protected_redirects_resolved_non_authenticated_to_login() {
    assert_eq!(authorize(AccessLevel::Protected, &Session::anonymous()), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(authorize(AccessLevel::Protected, &Session::authenticating()), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn public_only_redirects_authenticated_home() {
    let session = Session::authenticated(user("u1", "a@b.com"));
    assert_eq!(authorize(AccessLevel::PublicOnly, &session), GateDecision::Redirect(HOME_PATH));
}

#[test]
fn public_only_renders_forms_for_signed_out_users() {
    assert_eq!(authorize(AccessLevel::PublicOnly, &Session::anonymous()), GateDecision::Render);
    assert_eq!(authorize(AccessLevel::PublicOnly, &Session::authenticating()), GateDecision::Render);
}

#[test]
fn gated_routes_suspend_while_unknown() {
    assert_eq!(authorize(AccessLevel::Protected, &Session::unknown()), GateDecision::Suspend);
    assert_eq!(authorize(AccessLevel::PublicOnly, &Session::unknown()), GateDecision::Suspend);
}

#[test]
fn unrestricted_always_renders() {
    for session in all_sessions() {
        assert_eq!(authorize(AccessLevel::Unrestricted, &session), GateDecision::Render);
    }
}

#[test]
fn protected_visit_then_login_lands_home() {
    // /quiz/5 while signed out bounces to the login form.
    let anonymous = Session::anonymous();
    let GateDecision::Redirect(to) = authorize(AccessLevel::Protected, &anonymous) else {
        panic!("protected route must redirect when signed out");
    };
    assert_eq!(to, LOGIN_PATH);
    assert_eq!(authorize(AccessLevel::PublicOnly, &anonymous), GateDecision::Render);

    // Once the login resolves the form route sends the user home.
    let signed_in = Session::authenticated(user("u1", "a@b.com"));
    assert_eq!(authorize(AccessLevel::PublicOnly, &signed_in), GateDecision::Redirect(HOME_PATH));
    assert_eq!(authorize(AccessLevel::Protected, &signed_in), GateDecision::Render);
}
