use super::*;

fn user(email: &str, first: &str, last: &str, name: Option<&str>) -> User {
    User {
        email: email.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        name: name.map(str::to_owned),
        ..User::default()
    }
}

// =============================================================
// display_name / initials
// =============================================================

#[test]
fn name_takes_precedence() {
    let u = user("ada@example.com", "Augusta", "King", Some("Ada Lovelace"));
    assert_eq!(display_name(&u), "Ada Lovelace");
    assert_eq!(initials(&display_name(&u)), "AL");
}

#[test]
fn first_and_last_used_without_name() {
    let u = user("bo@example.com", "Bo", "Li", None);
    assert_eq!(display_name(&u), "Bo Li");
    assert_eq!(initials(&display_name(&u)), "BL");
}

#[test]
fn email_used_when_names_blank() {
    let u = user("x@y.com", "", "", None);
    assert_eq!(display_name(&u), "x@y.com");
    assert_eq!(initials(&display_name(&u)), "X");
}

#[test]
fn blank_name_falls_through() {
    let u = user("bo@example.com", "Bo", "", Some("  "));
    assert_eq!(display_name(&u), "Bo");
}

#[test]
fn initials_truncate_to_two() {
    assert_eq!(initials("mary ann evans"), "MA");
}

#[test]
fn initials_collapse_repeated_whitespace() {
    assert_eq!(initials("  ada   lovelace "), "AL");
}

#[test]
fn initials_of_empty_name_is_empty() {
    assert_eq!(initials(""), "");
}

#[test]
fn initials_are_idempotent() {
    let once = initials("Ada Lovelace");
    assert_eq!(initials(&once), "A");
    assert_eq!(initials("Ada Lovelace"), once);
}

// =============================================================
// greeting_name
// =============================================================

#[test]
fn greeting_prefers_first_name() {
    assert_eq!(greeting_name(&user("a@b.com", "Ada", "L", Some("Countess Ada"))), "Ada");
}

#[test]
fn greeting_uses_first_word_of_name() {
    assert_eq!(greeting_name(&user("a@b.com", "", "", Some("Ada Lovelace"))), "Ada");
}

#[test]
fn greeting_defaults_to_there() {
    assert_eq!(greeting_name(&user("a@b.com", "", "", None)), "there");
}

// =============================================================
// auth_method_label / member_since
// =============================================================

#[test]
fn auth_method_is_capitalized() {
    assert_eq!(auth_method_label("google"), "Google");
    assert_eq!(auth_method_label("manual"), "Manual");
    assert_eq!(auth_method_label(""), "Unknown");
}

#[test]
fn member_since_formats_naive_timestamp() {
    assert_eq!(member_since(Some("2024-03-09T12:30:00.123000")), Some("March 9, 2024".to_owned()));
}

#[test]
fn member_since_formats_offset_timestamp() {
    assert_eq!(member_since(Some("2023-12-31T23:59:59+00:00")), Some("December 31, 2023".to_owned()));
}

#[test]
fn member_since_rejects_garbage() {
    assert_eq!(member_since(None), None);
    assert_eq!(member_since(Some("yesterday")), None);
    assert_eq!(member_since(Some("2024-13-40T00:00:00")), None);
}
