//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies failures and derives the
//! user-facing message, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
