//! Google Identity Services button.
//!
//! Renders the provider's button into a container once mounted and forwards
//! the one-time credential to `on_credential` without inspecting it. Needs the
//! `accounts.google.com/gsi/client` script, which the shell loads. When the
//! provider cannot be set up the button is replaced by a passive notice; that
//! is a configuration state, not a failed sign-in attempt.

#[cfg(test)]
#[path = "google_sign_in_test.rs"]
mod google_sign_in_test;

use leptos::prelude::*;

use crate::config::ClientConfig;

/// Button caption variant understood by the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoogleButtonText {
    #[default]
    SignIn,
    SignUp,
}

impl GoogleButtonText {
    /// Value of the provider's `text` render option.
    pub fn provider_value(self) -> &'static str {
        match self {
            Self::SignIn => "signin_with",
            Self::SignUp => "signup_with",
        }
    }
}

pub const UNAVAILABLE_NOTICE: &str = "Google sign-in unavailable";

/// Setup state of the provider button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GsiStatus {
    #[default]
    Pending,
    Ready,
    /// No OAuth client ID was configured.
    NoClientId,
    /// `google.accounts.id` is missing or rejected the setup calls.
    ProviderMissing,
}

impl GsiStatus {
    /// Notice shown in place of the button, if any.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Pending | Self::Ready => None,
            Self::NoClientId | Self::ProviderMissing => Some(UNAVAILABLE_NOTICE),
        }
    }
}

#[cfg(feature = "hydrate")]
mod gsi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
        pub fn initialize(config: &js_sys::Object) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
        pub fn render_button(parent: &web_sys::HtmlElement, options: &js_sys::Object) -> Result<(), JsValue>;
    }

    pub fn set(target: &js_sys::Object, key: &str, value: &JsValue) {
        let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
    }

    pub fn credential(response: &JsValue) -> Option<String> {
        js_sys::Reflect::get(response, &JsValue::from_str("credential"))
            .ok()?
            .as_string()
            .filter(|c| !c.is_empty())
    }
}

/// Provider sign-in button.
///
/// `on_error` fires only when the provider answers a sign-in attempt without
/// a credential. Setup problems are shown inline via [`GsiStatus::notice`].
/// The provider callback lives as long as the component.
#[component]
pub fn GoogleSignInButton(
    on_credential: Callback<String>,
    on_error: Callback<()>,
    #[prop(optional)] text: GoogleButtonText,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let client_id = use_context::<ClientConfig>().and_then(|c| c.google_client_id);
    let status = RwSignal::new(GsiStatus::Pending);

    #[cfg(feature = "hydrate")]
    let held = StoredValue::new_local(None::<wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue)>>);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen::prelude::*;

        let Some(el) = container.get() else {
            return;
        };
        if held.with_value(Option::is_some) {
            return;
        }
        let Some(client_id) = client_id.clone() else {
            leptos::logging::warn!("google sign-in disabled: no client id configured");
            status.set(GsiStatus::NoClientId);
            return;
        };

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| match gsi::credential(&response) {
            Some(credential) => on_credential.run(credential),
            None => on_error.run(()),
        });
        let init = js_sys::Object::new();
        gsi::set(&init, "client_id", &JsValue::from_str(&client_id));
        gsi::set(&init, "callback", callback.as_ref());
        held.set_value(Some(callback));

        if let Err(err) = gsi::initialize(&init) {
            leptos::logging::warn!("google sign-in unavailable: {err:?}");
            status.set(GsiStatus::ProviderMissing);
            return;
        }

        let options = js_sys::Object::new();
        gsi::set(&options, "theme", &JsValue::from_str("filled_black"));
        gsi::set(&options, "size", &JsValue::from_str("large"));
        gsi::set(&options, "text", &JsValue::from_str(text.provider_value()));
        match gsi::render_button(&el, &options) {
            Ok(()) => status.set(GsiStatus::Ready),
            Err(err) => {
                leptos::logging::warn!("google button render failed: {err:?}");
                status.set(GsiStatus::ProviderMissing);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (on_credential, on_error, text, client_id);

    view! {
        <div class="google-button" node_ref=container></div>
        <Show when=move || status.get().notice().is_some()>
            <p class="google-button__notice">{move || status.get().notice().unwrap_or_default()}</p>
        </Show>
    }
}
