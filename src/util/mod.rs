//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! build-time config) from page and component logic.

pub mod alerts;
pub mod clock;
pub mod config;
pub mod theme;
