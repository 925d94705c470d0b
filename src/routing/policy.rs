//! Route access levels and the one authorization function every route uses.
//!
//! DESIGN
//! ======
//! Gates never fail. An unresolved session suspends rendering instead of
//! guessing, which avoids flashing the wrong content during startup.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::state::session::{Session, SessionStatus};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Required authentication level for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    /// Only for signed-out users (login, sign-up forms).
    PublicOnly,
    /// Only for signed-in users.
    Protected,
    /// Everyone.
    Unrestricted,
}

/// What a gate does with its nested content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    Redirect(&'static str),
    /// Render nothing until the session resolves.
    Suspend,
}

/// Decide render/redirect/suspend for `access` under `session`.
pub fn authorize(access: AccessLevel, session: &Session) -> GateDecision {
    match (access, session.status()) {
        (AccessLevel::Unrestricted, _) => GateDecision::Render,
        (_, SessionStatus::Unknown) => GateDecision::Suspend,
        (AccessLevel::Protected, SessionStatus::Authenticated) => GateDecision::Render,
        (AccessLevel::Protected, SessionStatus::Anonymous | SessionStatus::Authenticating) => {
            GateDecision::Redirect(LOGIN_PATH)
        }
        (AccessLevel::PublicOnly, SessionStatus::Authenticated) => GateDecision::Redirect(HOME_PATH),
        (AccessLevel::PublicOnly, SessionStatus::Anonymous | SessionStatus::Authenticating) => GateDecision::Render,
    }
}
