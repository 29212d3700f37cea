//! Registration page. Creating an account does not sign the user in; on
//! success the visitor is sent to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::login::failure_notice;
use crate::components::notification::{Notice, Notification};
use crate::net::types::Registration;
use crate::state::session::{SessionError, SessionMachine};
use crate::util::guard::LOGIN_PATH;

pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter a username, email and password.");
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// The backend acknowledges a new account with a message; an empty body is
/// not an acknowledgement.
pub(crate) fn confirm_registration_message(message: &str) -> Result<(), SessionError> {
    if message.trim().is_empty() {
        Err(SessionError::ValidationMismatch("Registration failed: Invalid response".to_owned()))
    } else {
        Ok(())
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionMachine>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration =
            match validate_register_input(&username.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(registration) => registration,
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
            let outcome = session.register(registration).await.and_then(|m| confirm_registration_message(&m));
            busy.set(false);
            match outcome {
                Ok(()) => {
                    password.set(String::new());
                    notice.set(Some(Notice::success("Registered successfully")));
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(err) => notice.set(failure_notice(&err, "Registration failed")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up for a new account"</h1>
                <p class="auth-card__subtitle">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Sign in"</A>
                </p>
                <Notification notice=notice/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "User name"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Enter your user name"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Sign up"
                    </button>
                </form>
            </div>
        </div>
    }
}
