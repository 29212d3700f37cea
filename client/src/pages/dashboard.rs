//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuthenticated`, so a user is present whenever the
//! body renders. Receipt views hang off this page.

use leptos::prelude::*;

use crate::components::user_menu::UserMenu;
use crate::net::types::{OAuthProvider, User};
use crate::state::session::SessionMachine;

/// "Signed in with Google" style line for OAuth accounts.
pub(crate) fn provider_line(user: &User) -> Option<String> {
    let provider = user.auth_provider.as_deref()?.trim();
    if provider.is_empty() {
        return None;
    }
    let label = provider.parse::<OAuthProvider>().map_or_else(|_| provider.to_owned(), |p| p.label().to_owned());
    Some(format!("Signed in with {label}"))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<SessionMachine>().state();

    let greeting = move || state.with(|s| s.user().map(|u| format!("Welcome, {}", u.username)).unwrap_or_default());
    let email = move || state.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());
    let provider = move || state.with(|s| s.user().and_then(provider_line));

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__brand">"Receipt Desk"</span>
                <UserMenu/>
            </header>
            <main class="dashboard__body">
                <h1>{greeting}</h1>
                <p class="dashboard__email">{email}</p>
                {move || provider().map(|line| view! { <p class="dashboard__provider">{line}</p> })}
            </main>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
