use super::*;

#[test]
fn button_text_maps_to_provider_values() {
    assert_eq!(GoogleButtonText::SignIn.provider_value(), "signin_with");
    assert_eq!(GoogleButtonText::SignUp.provider_value(), "signup_with");
}

#[test]
fn button_text_defaults_to_sign_in() {
    assert_eq!(GoogleButtonText::default(), GoogleButtonText::SignIn);
}

#[test]
fn setup_problems_show_unavailable_notice() {
    assert_eq!(GsiStatus::NoClientId.notice(), Some("Google sign-in unavailable"));
    assert_eq!(GsiStatus::ProviderMissing.notice(), Some(UNAVAILABLE_NOTICE));
}

#[test]
fn working_button_shows_no_notice() {
    assert_eq!(GsiStatus::default(), GsiStatus::Pending);
    assert_eq!(GsiStatus::Pending.notice(), None);
    assert_eq!(GsiStatus::Ready.notice(), None);
}

#[test]
fn unavailable_notice_is_not_a_login_failure() {
    let notice = GsiStatus::NoClientId.notice().unwrap();
    assert_ne!(notice, crate::pages::login::LOGIN_FAILED);
    assert_ne!(notice, crate::pages::register::GOOGLE_SIGNUP_FAILED);
}
