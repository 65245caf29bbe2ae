//! Register page: email/password account creation plus Google sign-up.
//!
//! Validation runs locally before any request; failures are shown inline
//! under the heading. The form draft lives only as long as the page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::google_sign_in::{GoogleButtonText, GoogleSignInButton};
use crate::net::api::HttpAuthApi;
use crate::net::error::{ApiError, error_message};
use crate::net::types::User;
use crate::state::register::{RegisterField, RegisterForm};
use crate::util::session_store::BrowserTokenStore;

pub const GOOGLE_SIGNUP_FAILED: &str = "Google registration failed";

/// Inline text for a failed Google sign-up.
pub fn google_signup_message(err: &ApiError) -> String {
    error_message(err, GOOGLE_SIGNUP_FAILED)
}

/// Label, input type and placeholder for each form input, in display order.
pub const FORM_FIELDS: [(RegisterField, &str, &str, &str); 5] = [
    (RegisterField::Email, "Email Address", "email", "Enter your email"),
    (RegisterField::FirstName, "First Name", "text", "First name"),
    (RegisterField::LastName, "Last Name", "text", "Last name"),
    (RegisterField::Password, "Password", "password", "Create a password"),
    (RegisterField::ConfirmPassword, "Confirm Password", "password", "Confirm your password"),
];

#[component]
pub fn RegisterPage(on_register: Callback<User>, on_switch_to_login: Callback<()>) -> impl IntoView {
    let api = expect_context::<HttpAuthApi>();
    let store = expect_context::<BrowserTokenStore>();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let submit_api = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(None);

        let draft = form.get_untracked();
        if let Err(err) = draft.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let api = submit_api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::auth::register_account(&api, &store, &draft).await;
                loading.set(false);
                match result {
                    Ok(user) => on_register.run(user),
                    Err(err) => error.set(Some(err.message())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (&submit_api, &store, draft, &on_register);
    };

    let on_credential = Callback::new(move |credential: String| {
        if loading.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::auth::google_sign_in(&api, &store, &credential).await;
                loading.set(false);
                match result {
                    Ok(user) => on_register.run(user),
                    Err(err) => error.set(Some(google_signup_message(&err))),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &credential);
    });

    let on_google_error = Callback::new(move |()| error.set(Some(GOOGLE_SIGNUP_FAILED.to_owned())));

    let input = move |(field, label, kind, placeholder): (RegisterField, &'static str, &'static str, &'static str)| {
        view! {
            <label class="auth-field">
                <span class="auth-field__label">{label}</span>
                <input
                    class="auth-input"
                    type=kind
                    name=field.name()
                    placeholder=placeholder
                    required=true
                    prop:value=move || form.with(|f| field.get(f).to_owned())
                    on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
                />
            </label>
        }
    };
    let [email, first, last, password, confirm] = FORM_FIELDS;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"ICY"</h1>
                <h2 class="auth-card__title">"Create Account"</h2>
                <p class="auth-card__subtitle">"Join us and explore amazing features"</p>
                <Show when=move || error.with(Option::is_some)>
                    <div class="auth-error">
                        <p>{move || error.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {input(email)}
                    <div class="auth-form__row">{input(first)} {input(last)}</div>
                    {input(password)}
                    {input(confirm)}
                    <button class="auth-button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <div class="auth-divider">
                    <span>"or continue with"</span>
                </div>
                <GoogleSignInButton on_credential=on_credential on_error=on_google_error text=GoogleButtonText::SignUp/>
                <p class="auth-switch">
                    <span>"Already have an account? "</span>
                    <button type="button" class="auth-link" on:click=move |_| on_switch_to_login.run(())>
                        "Sign in here"
                    </button>
                </p>
            </div>
        </div>
    }
}
