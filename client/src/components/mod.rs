//! UI building blocks rendered by the pages.

pub mod avatar;
pub mod google_sign_in;
