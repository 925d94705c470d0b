//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome (navigation, alerts, preloader), the route
//! gate, and scroll restoration, reading shared state from Leptos context
//! providers.

pub mod alert_list;
pub mod gate;
pub mod nav_bar;
pub mod preloader;
pub mod scroll_restorer;
