//! Networking modules for the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the backend seam and its error type, `api` implements it
//! over HTTP, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
