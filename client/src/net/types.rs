//! Wire DTOs for the ICY auth API.
//!
//! DESIGN
//! ======
//! Shapes are dictated by the backend. Optional fields default on decode so a
//! sparse `user` object in a login envelope and the fuller `/users/me` payload
//! share one `User` type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user profile as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier, if supplied.
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Full display name, when the provider supplies one.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// How the account authenticates (e.g. `"manual"`, `"google"`).
    #[serde(default)]
    pub auth_method: String,
    /// Account creation timestamp (ISO 8601). Absent from auth envelopes.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful response from register, login and Google exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// Payload for `POST /auth/register`. The password confirmation never leaves the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/google`.
///
/// The backend names the field `access_token` even though it carries the
/// Google ID credential, forwarded verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleAuthRequest {
    pub access_token: String,
}
