//! Profile avatar with an initials fallback.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::profile::{display_name, initials};

/// Profile picture when the user has one, otherwise an initials badge.
#[component]
pub fn Avatar(user: User) -> impl IntoView {
    match user.profile_picture.clone().filter(|url| !url.trim().is_empty()) {
        Some(url) => view! { <img class="avatar" src=url alt="Profile" referrerpolicy="no-referrer"/> }.into_any(),
        None => {
            let badge = initials(&display_name(&user));
            view! {
                <div class="avatar avatar--initials">
                    <span>{badge}</span>
                </div>
            }
            .into_any()
        }
    }
}
