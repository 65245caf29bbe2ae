use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8000", REGISTER_PATH), "http://localhost:8000/auth/register");
    assert_eq!(endpoint("https://api.icy.dev/", CURRENT_USER_PATH), "https://api.icy.dev/users/me");
}

#[test]
fn http_auth_api_trims_trailing_slashes() {
    let api = HttpAuthApi::new("https://api.icy.dev//");
    assert_eq!(api.base_url(), "https://api.icy.dev");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_without_browser() {
    let api = HttpAuthApi::new("http://localhost:8000");
    let err = futures::executor::block_on(api.current_user("tok")).unwrap_err();
    assert_eq!(err, ApiError::Client("not available on server".to_owned()));
}
