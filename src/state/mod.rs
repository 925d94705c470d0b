//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust with no reactive dependencies except where a
//! form flag or alert sink needs one, so the session store, bootstrap, and
//! notification queue are all testable off the browser.

pub mod actions;
pub mod bootstrap;
pub mod notifications;
pub mod session;
