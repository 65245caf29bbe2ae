//! Runtime configuration handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host builds a `ClientConfig` from its environment and the shell renders
//! it as `<meta>` tags. After hydration the client reads the same tags back, so
//! one WASM bundle works against any backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `<meta>` name carrying the backend base URL.
pub const API_BASE_META: &str = "icy-api-base-url";
/// `<meta>` name carrying the Google OAuth client ID.
pub const GOOGLE_CLIENT_META: &str = "google-signin-client_id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Google sign-in is unavailable when absent.
    pub google_client_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), google_client_id: None }
    }
}

impl ClientConfig {
    /// Normalize raw values: blanks become defaults, trailing slashes are dropped.
    pub fn new(api_base_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .map_or(DEFAULT_API_BASE_URL, |url| url.trim_end_matches('/'))
            .to_owned();
        let google_client_id = non_blank(google_client_id).map(str::to_owned);
        Self { api_base_url, google_client_id }
    }

    /// Read the config the shell rendered into the document.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(read_meta(API_BASE_META).as_deref(), read_meta(GOOGLE_CLIENT_META).as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}
