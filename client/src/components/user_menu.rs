//! Signed-in user chip with avatar and logout.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::SessionMachine;
use crate::util::guard::LOGIN_PATH;

/// Two-letter initials used when the user has no profile picture.
pub fn initials(user: &User) -> String {
    let source = if user.username.trim().is_empty() { &user.email } else { &user.username };
    source
        .split(|c: char| c.is_whitespace() || c == '.' || c == '_' || c == '@')
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<SessionMachine>();
    let state = session.state();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            busy.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        });
    };

    let avatar = move || {
        state.with(|s| {
            s.user().map(|user| match user.profile_picture.clone() {
                Some(src) => view! { <img class="user-menu__avatar" src=src alt="Profile picture"/> }.into_any(),
                None => view! { <span class="user-menu__avatar user-menu__avatar--initials">{initials(user)}</span> }
                    .into_any(),
            })
        })
    };
    let name = move || state.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());

    view! {
        <div class="user-menu">
            {avatar}
            <span class="user-menu__name">{name}</span>
            <button class="user-menu__logout" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </div>
    }
}
