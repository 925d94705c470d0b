//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read the session and alert queue from context and never gate
//! themselves; `app.rs` wraps gated routes in `Gate`.

pub mod contact;
pub mod content;
pub mod forms;
pub mod login;
pub mod reset;
pub mod signup;
