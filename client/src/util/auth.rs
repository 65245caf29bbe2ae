//! Session flows shared by the auth screens and the root controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow combines one `AuthApi` call with the `TokenStore` contract:
//! success persists the returned token before the user is handed back, and a
//! rejected session drops the token. Views only decide where to show the
//! outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::AuthApi;
use crate::net::error::{ApiError, registration_error_message};
use crate::net::types::{AuthResponse, LoginRequest, User};
use crate::state::auth::{AuthState, VerifyApplied, VerifyTicket};
use crate::state::register::{RegisterError, RegisterForm};
use crate::util::session_store::TokenStore;

/// Why a registration submit failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterFailure {
    #[error(transparent)]
    Invalid(#[from] RegisterError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RegisterFailure {
    /// Inline message for the register screen.
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Api(err) => registration_error_message(err),
        }
    }
}

fn accept<S: TokenStore + ?Sized>(store: &S, resp: AuthResponse) -> User {
    store.save(&resp.access_token);
    leptos::logging::log!("signed in as {}", resp.user.email);
    resp.user
}

/// Ask the backend who the persisted token belongs to.
///
/// `None` when no token is stored or the backend rejects it. The token is not
/// touched here; `apply_verification` decides whether to drop it.
pub async fn check_session<A, S>(api: &A, store: &S) -> Option<User>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let token = store.load()?;
    match api.current_user(&token).await {
        Ok(user) => Some(user),
        Err(err) => {
            leptos::logging::warn!("token verification failed: {err}");
            None
        }
    }
}

/// Apply a verification outcome, clearing the token if the session was rejected.
pub fn apply_verification<S: TokenStore + ?Sized>(
    state: &mut AuthState,
    store: &S,
    ticket: VerifyTicket,
    user: Option<User>,
) -> VerifyApplied {
    let applied = state.finish_verify(ticket, user);
    if applied == VerifyApplied::SignedOut {
        store.clear();
    }
    applied
}

/// End the session: drop the token and return to Login.
pub fn sign_out<S: TokenStore + ?Sized>(state: &mut AuthState, store: &S) {
    store.clear();
    state.sign_out();
}

/// Validate the draft, then create the account.
///
/// # Errors
///
/// Returns [`RegisterFailure::Invalid`] without any network call when local
/// validation fails, or [`RegisterFailure::Api`] when the backend call fails.
pub async fn register_account<A, S>(api: &A, store: &S, form: &RegisterForm) -> Result<User, RegisterFailure>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let payload = form.validate()?;
    let resp = api.register(&payload).await?;
    Ok(accept(store, resp))
}

/// Exchange a Google credential for a session.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange; render it with `error_message`.
pub async fn google_sign_in<A, S>(api: &A, store: &S, credential: &str) -> Result<User, ApiError>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    match api.google_login(credential).await {
        Ok(resp) => Ok(accept(store, resp)),
        Err(err) => {
            leptos::logging::warn!("google sign-in failed: {err}");
            Err(err)
        }
    }
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns the [`ApiError`] from the login call.
pub async fn password_sign_in<A, S>(api: &A, store: &S, email: &str, password: &str) -> Result<User, ApiError>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    let payload = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
    let resp = api.login(&payload).await?;
    Ok(accept(store, resp))
}
