use super::*;

#[test]
fn server_detail_is_shown_verbatim() {
    let err = ApiError::from_response(401, "Unauthorized", r#"{"detail":"Invalid Google token"}"#);
    assert_eq!(login_failure_message(&err), "Invalid Google token");
}

#[test]
fn status_text_used_without_detail() {
    let err = ApiError::from_response(502, "Bad Gateway", "<html>oops</html>");
    assert_eq!(login_failure_message(&err), "Bad Gateway");
}

#[test]
fn no_response_uses_connection_message() {
    let err = ApiError::NoResponse("fetch failed".to_owned());
    assert_eq!(login_failure_message(&err), "No response from server. Please check your connection.");
}

#[test]
fn client_error_message_is_last_resort() {
    assert_eq!(login_failure_message(&ApiError::Client("boom".to_owned())), "boom");
    assert_eq!(login_failure_message(&ApiError::Client(String::new())), LOGIN_FAILED);
}

#[test]
fn bare_response_falls_back_to_generic_message() {
    let err = ApiError::from_response(500, "", "");
    assert_eq!(login_failure_message(&err), LOGIN_FAILED);
}
