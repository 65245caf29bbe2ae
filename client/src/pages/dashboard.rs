//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root controller only mounts this page once the session is
//! authenticated. The user normally arrives pre-loaded in `AuthState`; when it
//! is missing the page re-verifies the token itself and hands control back via
//! `on_logout` if the backend rejects it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::api::HttpAuthApi;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::profile::{auth_method_label, display_name, full_name, greeting_name, member_since};
use crate::util::session_store::BrowserTokenStore;

/// Static feature tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "ML Analytics",
        description: "View your machine learning model performance and predictions",
        action: "View Analytics",
    },
    FeatureCard {
        title: "Data Insights",
        description: "Explore data visualizations and statistical analysis",
        action: "Explore Data",
    },
    FeatureCard {
        title: "Reports",
        description: "Generate and download comprehensive reports",
        action: "View Reports",
    },
];

/// Static entry in the recent activity feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
}

pub const RECENT_ACTIVITY: [ActivityItem; 3] = [
    ActivityItem {
        title: "Model training completed",
        detail: "Decision Tree model achieved 95% accuracy",
        when: "2 hours ago",
    },
    ActivityItem {
        title: "Data visualization generated",
        detail: "Created correlation heatmap and charts",
        when: "5 hours ago",
    },
    ActivityItem { title: "Account created successfully", detail: "Welcome to ICY platform!", when: "Today" },
];

/// Label/value pairs for the profile card.
pub fn profile_rows(user: &User) -> [(&'static str, String); 4] {
    [
        ("Email Address", user.email.clone()),
        ("Full Name", full_name(user)),
        ("Authentication Method", auth_method_label(&user.auth_method)),
        ("Member Since", member_since(user.created_at.as_deref()).unwrap_or_else(|| "Unknown".to_owned())),
    ]
}

#[component]
pub fn DashboardPage(on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpAuthApi>();
    let store = expect_context::<BrowserTokenStore>();
    let user = Memo::new(move |_| auth.with(|s| s.user.clone()));

    // Re-verify when mounted without a cached profile.
    Effect::new(move |_| {
        if user.with(Option::is_some) {
            return;
        }
        let mut ticket = None;
        auth.update(|s| ticket = s.begin_verify());
        let Some(ticket) = ticket else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::util::auth::check_session(&api, &store).await;
                let mut applied = crate::state::auth::VerifyApplied::Stale;
                auth.update(|s| applied = crate::util::auth::apply_verification(s, &store, ticket, fetched));
                if applied == crate::state::auth::VerifyApplied::SignedOut {
                    on_logout.run(());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, &store, ticket);
    });

    move || match user.get() {
        Some(user) => view! { <DashboardContent user=user on_logout=on_logout/> }.into_any(),
        None => view! {
            <div class="loading-screen">
                <div class="loading-card">
                    <span class="spinner"></span>
                    <p>"Loading your dashboard..."</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn DashboardContent(user: User, on_logout: Callback<()>) -> impl IntoView {
    let name = display_name(&user);
    let greeting = greeting_name(&user);
    let email = user.email.clone();
    let rows = profile_rows(&user);

    view! {
        <div class="dashboard">
            <nav class="dashboard-nav">
                <div class="dashboard-nav__brand">
                    <h1>"ICY"</h1>
                    <span>"Dashboard"</span>
                </div>
                <div class="dashboard-nav__profile">
                    <Avatar user=user/>
                    <div class="dashboard-nav__identity">
                        <p class="dashboard-nav__name">{name}</p>
                        <p class="dashboard-nav__email">{email}</p>
                    </div>
                    <button class="dashboard-nav__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </nav>
            <main class="dashboard-main">
                <section class="dashboard-card">
                    <h2>{format!("Welcome back, {greeting}!")}</h2>
                    <p>"Ready to explore the amazing features of ICY? Let's get started!"</p>
                </section>
                <section class="dashboard-card">
                    <h3>"Your Profile"</h3>
                    <div class="profile-grid">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="profile-field">
                                        <label>{label}</label>
                                        <p>{value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
                <div class="feature-grid">
                    {FEATURE_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="feature-card">
                                    <h3>{card.title}</h3>
                                    <p>{card.description}</p>
                                    <button type="button" class="feature-card__action">{card.action}</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <section class="dashboard-card">
                    <h3>"Recent Activity"</h3>
                    <ul class="activity-list">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="activity-item">
                                        <div>
                                            <p class="activity-item__title">{item.title}</p>
                                            <p class="activity-item__detail">{item.detail}</p>
                                        </div>
                                        <span class="activity-item__when">{item.when}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
