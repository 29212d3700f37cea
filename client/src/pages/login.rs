//! Login page: email + password, OAuth hand-off, and the OAuth return leg.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RedirectIfAuthenticated`. The identity provider sends the
//! browser back to `/auth/login?oauth=callback`, which this page detects and
//! finishes through the session machine.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::notification::{Notice, Notification};
use crate::net::types::{Credentials, LoginResponse, OAuthProvider};
use crate::state::session::{SessionError, SessionMachine};
use crate::util::guard::{LANDING_PATH, REGISTER_PATH};

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// A login only counts once the response carries a token and a full identity.
pub(crate) fn confirm_login_response(response: &LoginResponse) -> Result<(), SessionError> {
    if response.is_complete() {
        Ok(())
    } else {
        Err(SessionError::ValidationMismatch("Login failed: Invalid response".to_owned()))
    }
}

pub(crate) fn is_oauth_callback(marker: Option<&str>) -> bool {
    marker.is_some_and(|m| m == "callback")
}

/// Notice for a failed attempt. A superseded attempt shows nothing.
pub(crate) fn failure_notice(err: &SessionError, fallback: &str) -> Option<Notice> {
    match err {
        SessionError::Superseded => None,
        other => {
            let message = other.to_string();
            Some(Notice::error(if message.trim().is_empty() { fallback.to_owned() } else { message }))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionMachine>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let callback_started = RwSignal::new(false);

    {
        let session = session.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if callback_started.get_untracked() || !is_oauth_callback(query.with(|q| q.get("oauth")).as_deref()) {
                return;
            }
            callback_started.set(true);
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.handle_oauth_callback().await {
                    Ok(_) => {
                        notice.set(Some(Notice::success("OAuth login successful")));
                        navigate(LANDING_PATH, NavigateOptions::default());
                    }
                    Err(err) => notice.set(failure_notice(&err, "OAuth login failed")),
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                notice.set(Some(Notice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.login(credentials).await.and_then(|r| confirm_login_response(&r));
            busy.set(false);
            match outcome {
                Ok(()) => {
                    password.set(String::new());
                    notice.set(Some(Notice::success("Login successful")));
                    navigate(LANDING_PATH, NavigateOptions::default());
                }
                Err(err) => notice.set(failure_notice(&err, "Login failed")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <p class="auth-card__subtitle">
                    "Don't have an account? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
                <Notification notice=notice/>
                <div class="auth-card__oauth">
                    <OAuthButton provider=OAuthProvider::Google/>
                    <OAuthButton provider=OAuthProvider::GitHub/>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Button that hands the page off to an identity provider.
#[component]
fn OAuthButton(provider: OAuthProvider) -> impl IntoView {
    let session = expect_context::<SessionMachine>();
    let state = session.state();
    let pending = move || state.with(|s| s.oauth_loading());

    view! {
        <button
            class="oauth-button"
            type="button"
            disabled=pending
            on:click=move |_| session.initiate_oauth_login(provider)
        >
            {move || if pending() { "Signing in...".to_owned() } else { format!("Continue with {}", provider.label()) }}
        </button>
    }
}
