use super::*;

fn user() -> User {
    User {
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        auth_method: "google".to_owned(),
        created_at: Some("2024-03-09T12:30:00".to_owned()),
        ..User::default()
    }
}

#[test]
fn profile_rows_render_formatted_values() {
    let rows = profile_rows(&user());
    assert_eq!(
        rows,
        [
            ("Email Address", "ada@example.com".to_owned()),
            ("Full Name", "Ada Lovelace".to_owned()),
            ("Authentication Method", "Google".to_owned()),
            ("Member Since", "March 9, 2024".to_owned()),
        ]
    );
}

#[test]
fn missing_or_bad_created_at_shows_unknown() {
    let mut u = user();
    u.created_at = None;
    assert_eq!(profile_rows(&u)[3].1, "Unknown");
    u.created_at = Some("not a date".to_owned());
    assert_eq!(profile_rows(&u)[3].1, "Unknown");
}

#[test]
fn feature_cards_have_distinct_titles() {
    let titles: Vec<&str> = FEATURE_CARDS.iter().map(|c| c.title).collect();
    assert_eq!(titles, ["ML Analytics", "Data Insights", "Reports"]);
}

#[test]
fn activity_feed_is_fully_populated() {
    assert!(RECENT_ACTIVITY.iter().all(|a| !a.title.is_empty() && !a.when.is_empty()));
}
