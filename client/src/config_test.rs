use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.google_client_id, None);
}

#[test]
fn new_trims_and_strips_trailing_slash() {
    let config = ClientConfig::new(Some(" https://api.icy.dev/ "), Some(" 123.apps.googleusercontent.com "));
    assert_eq!(config.api_base_url, "https://api.icy.dev");
    assert_eq!(config.google_client_id.as_deref(), Some("123.apps.googleusercontent.com"));
}

#[test]
fn blank_values_fall_back() {
    let config = ClientConfig::new(Some("   "), Some(""));
    assert_eq!(config, ClientConfig::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}
