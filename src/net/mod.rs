//! Networking modules for the portal backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `types` defines the shared wire schema.
//! Everything is same-origin, so session cookies ride along automatically.

pub mod api;
pub mod types;
