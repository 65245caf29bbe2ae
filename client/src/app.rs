//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ClientConfig, GOOGLE_CLIENT_META};
use crate::net::api::HttpAuthApi;
use crate::pages::home::HomePage;
use crate::state::auth::AuthState;
use crate::util::session_store::BrowserTokenStore;

pub const GSI_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into `<meta>` tags so the browser picks up the same
/// backend URL and Google client ID after hydration.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let api_base_url = config.api_base_url.clone();
    let google_meta = config
        .google_client_id
        .clone()
        .map(|id| view! { <meta name=GOOGLE_CLIENT_META content=id/> });
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                {google_meta}
                <script src=GSI_SCRIPT_URL defer=true></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session state, the API adapter and the token store to every
/// page. Only the root path is routed; the session phase picks the screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(HttpAuthApi::new(config.api_base_url.clone()));
    provide_context(BrowserTokenStore);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/icy.css"/>
        <Title text="ICY"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
