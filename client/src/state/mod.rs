//! Shared client state held in Leptos context.

pub mod auth;
pub mod register;
