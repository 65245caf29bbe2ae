use super::*;

fn user(email: &str) -> User {
    User { email: email.to_owned(), ..User::default() }
}

// =============================================================
// Defaults and startup
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert_eq!(state.phase, Phase::Loading);
    assert!(state.user.is_none());
    assert!(!state.verifying);
}

#[test]
fn start_without_token_shows_login() {
    let mut state = AuthState::default();
    assert!(state.start(false).is_none());
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Login));
    assert!(!state.verifying);
}

#[test]
fn start_with_token_issues_ticket() {
    let mut state = AuthState::default();
    assert!(state.start(true).is_some());
    assert_eq!(state.phase, Phase::Loading);
    assert!(state.verifying);
}

#[test]
fn valid_token_enters_dashboard() {
    let mut state = AuthState::default();
    let ticket = state.start(true).unwrap();
    assert_eq!(state.finish_verify(ticket, Some(user("a@b.com"))), VerifyApplied::SignedIn);
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert!(!state.verifying);
}

#[test]
fn invalid_token_returns_to_login() {
    let mut state = AuthState::default();
    let ticket = state.start(true).unwrap();
    assert_eq!(state.finish_verify(ticket, None), VerifyApplied::SignedOut);
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Login));
    assert!(state.user.is_none());
}

// =============================================================
// Re-entrancy and staleness
// =============================================================

#[test]
fn second_verification_refused_while_in_flight() {
    let mut state = AuthState::default();
    let _first = state.start(true).unwrap();
    assert!(state.begin_verify().is_none());
}

#[test]
fn verification_slot_reopens_after_finish() {
    let mut state = AuthState::default();
    let ticket = state.start(true).unwrap();
    state.finish_verify(ticket, None);
    assert!(state.begin_verify().is_some());
}

#[test]
fn stale_success_cannot_resurrect_signed_out_session() {
    let mut state = AuthState::default();
    state.sign_in(user("a@b.com"));
    state.user = None;
    let ticket = state.begin_verify().unwrap();
    state.sign_out();
    assert_eq!(state.finish_verify(ticket, Some(user("a@b.com"))), VerifyApplied::Stale);
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Login));
    assert!(state.user.is_none());
}

#[test]
fn stale_failure_does_not_sign_out_new_session() {
    let mut state = AuthState::default();
    let ticket = state.start(true).unwrap();
    state.sign_in(user("new@b.com"));
    assert_eq!(state.finish_verify(ticket, None), VerifyApplied::Stale);
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("new@b.com"));
}

#[test]
fn sign_out_releases_verification_slot() {
    let mut state = AuthState::default();
    let _ticket = state.start(true).unwrap();
    state.sign_out();
    assert!(!state.verifying);
    assert!(state.begin_verify().is_some());
}

// =============================================================
// View switching
// =============================================================

#[test]
fn login_and_register_toggle() {
    let mut state = AuthState::default();
    state.start(false);
    state.show_register();
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Register));
    state.show_login();
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Login));
}

#[test]
fn switching_ignored_outside_unauthenticated() {
    let mut state = AuthState::default();
    state.show_register();
    assert_eq!(state.phase, Phase::Loading);
    state.sign_in(user("a@b.com"));
    state.show_register();
    assert!(state.is_authenticated());
}

#[test]
fn sign_in_from_register_then_logout_lands_on_login() {
    let mut state = AuthState::default();
    state.start(false);
    state.show_register();
    state.sign_in(user("a@b.com"));
    assert!(state.is_authenticated());
    state.sign_out();
    assert_eq!(state.phase, Phase::Unauthenticated(AuthView::Login));
    assert!(state.user.is_none());
}
