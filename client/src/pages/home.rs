//! Root controller: picks Login, Register or Dashboard from the session phase.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the persisted token (if any) is verified once against the
//! backend. Until that resolves the page shows a loading placeholder. Child
//! pages report auth outcomes through callbacks; this page owns every
//! transition of the shared `AuthState`.

use leptos::prelude::*;

use crate::net::api::HttpAuthApi;
use crate::net::types::User;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AuthState, AuthView, Phase};
use crate::util::auth::sign_out;
use crate::util::session_store::BrowserTokenStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpAuthApi>();
    let store = expect_context::<BrowserTokenStore>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::session_store::TokenStore;

        let has_token = store.load().is_some();
        let mut ticket = None;
        auth.update(|s| ticket = s.start(has_token));
        let Some(ticket) = ticket else {
            return;
        };
        let user = crate::util::auth::check_session(&api, &store).await;
        auth.update(|s| {
            crate::util::auth::apply_verification(s, &store, ticket, user);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    let on_signed_in = Callback::new(move |user: User| auth.update(|s| s.sign_in(user)));
    let on_logout = Callback::new(move |()| auth.update(|s| sign_out(s, &store)));
    let show_register = Callback::new(move |()| auth.update(AuthState::show_register));
    let show_login = Callback::new(move |()| auth.update(AuthState::show_login));

    let phase = Memo::new(move |_| auth.with(|s| s.phase));

    view! {
        <div class="app">
            {move || match phase.get() {
                Phase::Loading => view! { <div class="loading-screen">"Loading..."</div> }.into_any(),
                Phase::Unauthenticated(AuthView::Login) => {
                    view! { <LoginPage on_login=on_signed_in on_switch_to_register=show_register/> }.into_any()
                }
                Phase::Unauthenticated(AuthView::Register) => {
                    view! { <RegisterPage on_register=on_signed_in on_switch_to_login=show_login/> }.into_any()
                }
                Phase::Authenticated => view! { <DashboardPage on_logout=on_logout/> }.into_any(),
            }}
        </div>
    }
}
