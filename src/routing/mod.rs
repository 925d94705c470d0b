//! Access policy and scroll bookkeeping for the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table itself is declared with `leptos_router` in `app.rs`.
//! `policy` holds the single authorization function every gated route goes
//! through; `scroll` restores offsets on back/forward, which the router does
//! not do.

pub mod policy;
pub mod scroll;
