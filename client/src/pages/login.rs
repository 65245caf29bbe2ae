//! Login page. Google sign-in is the only path; there is no password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::google_sign_in::{GoogleButtonText, GoogleSignInButton};
use crate::net::api::HttpAuthApi;
use crate::net::error::{ApiError, error_message};
use crate::net::types::User;
use crate::util::session_store::BrowserTokenStore;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Alert text for a failed credential exchange.
pub fn login_failure_message(err: &ApiError) -> String {
    error_message(err, LOGIN_FAILED)
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn LoginPage(on_login: Callback<User>, on_switch_to_register: Callback<()>) -> impl IntoView {
    let api = expect_context::<HttpAuthApi>();
    let store = expect_context::<BrowserTokenStore>();
    let busy = RwSignal::new(false);

    let on_credential = Callback::new(move |credential: String| {
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::auth::google_sign_in(&api, &store, &credential).await;
                busy.set(false);
                match result {
                    Ok(user) => on_login.run(user),
                    Err(err) => alert(&login_failure_message(&err)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &store, &credential, &on_login);
    });

    let on_error = Callback::new(move |()| {
        leptos::logging::warn!("google sign-in widget failed");
        #[cfg(feature = "hydrate")]
        alert(LOGIN_FAILED);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"ICY"</h1>
                <h2 class="auth-card__title">"Welcome to ICY"</h2>
                <p class="auth-card__subtitle">"Sign in with your Google account to continue"</p>
                <GoogleSignInButton on_credential=on_credential on_error=on_error text=GoogleButtonText::SignIn/>
                <Show when=move || busy.get()>
                    <p class="auth-message">"Signing in..."</p>
                </Show>
                <p class="auth-switch">
                    <span>"Don't have an account? "</span>
                    <button type="button" class="auth-link" on:click=move |_| on_switch_to_register.run(())>
                        "Create an account"
                    </button>
                </p>
            </div>
        </div>
    }
}
