//! REST adapter for the ICY auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a client error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `ApiError::NoResponse`, non-2xx statuses to
//! `ApiError::Response` (with the body's `detail`), and decode failures to
//! `ApiError::Client`. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::GoogleAuthRequest;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const GOOGLE_PATH: &str = "/auth/google";
pub const CURRENT_USER_PATH: &str = "/users/me";

/// Operations the backend exposes to this client.
///
/// Futures are `?Send`: they run on the browser's single-threaded executor.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Create a manual (email + password) account.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Exchange a Google ID credential for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server rejects it.
    async fn google_login(&self, credential: &str) -> Result<AuthResponse, ApiError>;

    /// Fetch the user the bearer `token` belongs to.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the token is rejected.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// `AuthApi` over HTTP against a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Client("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), resp.status_text(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Client(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Client(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::NoResponse(e.to_string()))?;
    decode(resp).await
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&endpoint(&self.base_url, REGISTER_PATH), payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(unavailable())
        }
    }

    async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&endpoint(&self.base_url, LOGIN_PATH), payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(unavailable())
        }
    }

    async fn google_login(&self, credential: &str) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = GoogleAuthRequest { access_token: credential.to_owned() };
            post_json(&endpoint(&self.base_url, GOOGLE_PATH), &payload).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
            Err(unavailable())
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&endpoint(&self.base_url, CURRENT_USER_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::NoResponse(e.to_string()))?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(unavailable())
        }
    }
}
