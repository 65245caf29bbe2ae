//! Profile display helpers for the dashboard.
//!
//! All functions are total: any `User` the backend returns renders something.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::User;

/// `name`, else `"first_name last_name"`, else `email`.
pub fn display_name(user: &User) -> String {
    if let Some(name) = user.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    let full = full_name(user);
    if full.is_empty() { user.email.clone() } else { full }
}

/// `"first_name last_name"` with blank parts dropped.
pub fn full_name(user: &User) -> String {
    format!("{} {}", user.first_name.trim(), user.last_name.trim())
        .trim()
        .to_owned()
}

/// Up to two uppercase initials from the whitespace-separated words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Name used in the welcome line: first name, else first word of `name`, else `"there"`.
pub fn greeting_name(user: &User) -> String {
    let first = user.first_name.trim();
    if !first.is_empty() {
        return first.to_owned();
    }
    user.name
        .as_deref()
        .and_then(|name| name.split_whitespace().next())
        .map_or_else(|| "there".to_owned(), str::to_owned)
}

/// Capitalize an auth method for display (`"google"` -> `"Google"`).
pub fn auth_method_label(method: &str) -> String {
    let mut chars = method.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_owned(),
    }
}

/// Render `created_at` as `"Month D, YYYY"`.
///
/// Only the leading `YYYY-MM-DD` is read, so naive and offset timestamps both work.
pub fn member_since(created_at: Option<&str>) -> Option<String> {
    let prefix = created_at?.trim().get(..10)?;
    let date = Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()?;
    Some(format!("{} {}, {}", date.month(), date.day(), date.year()))
}
