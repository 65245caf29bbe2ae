//! Helpers shared by the pages.
//!
//! `session_store` owns the persisted token, `auth` composes API calls with
//! token persistence, and `profile` turns a `User` into display strings.

pub mod auth;
pub mod profile;
pub mod session_store;
