//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the root controller and the only routed page. It mounts one of
//! the other pages depending on the session phase and wires their callbacks.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
