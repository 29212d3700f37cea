//! Session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionMachine`] and provides it as context. Route
//! guards read [`SessionState`] reactively; pages call the operations. Nothing
//! else writes the state.
//!
//! DESIGN
//! ======
//! Every data operation runs `Loading -> {Succeeded | Failed}` and returns a
//! typed outcome; the failure message is also recorded in
//! [`SessionState::error`] for presentation. `logout` lands on `Idle`, which
//! is kept distinct from "checked, nobody is signed in" (`Succeeded` with no
//! user).
//!
//! Overlapping operations are ordered by a generation counter: each operation
//! takes a ticket when it starts and its result is applied only if no newer
//! operation has started since. Stale results are dropped and a stale login
//! does not persist its token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::{Credentials, LoginResponse, OAuthProvider, Registration, User};
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::token_store::TokenStore;

/// Progress of the most recent session operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Snapshot of who is signed in and how the last attempt went.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<User>,
    error: Option<String>,
    oauth_loading: bool,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True only while an OAuth page hand-off is in flight.
    pub fn oauth_loading(&self) -> bool {
        self.oauth_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub(crate) fn begin(&mut self) {
        self.error = None;
        self.status = SessionStatus::Loading;
    }

    pub(crate) fn settle(&mut self, user: Option<User>) {
        self.user = user;
        self.error = None;
        self.status = SessionStatus::Succeeded;
    }

    pub(crate) fn succeed(&mut self) {
        self.error = None;
        self.status = SessionStatus::Succeeded;
    }

    /// Failed attempt; `user` is left as it was.
    pub(crate) fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.status = SessionStatus::Failed;
    }

    /// Failed attempt that also drops any stale identity.
    pub(crate) fn fail_signed_out(&mut self, message: String) {
        self.user = None;
        self.fail(message);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Why a session operation did not produce its intended outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Network or server failure; the message is the server's when it sent one.
    #[error("{0}")]
    Request(String),
    #[error("No token found")]
    MissingOAuthToken,
    /// A 2xx response without the fields the caller needs.
    #[error("{0}")]
    ValidationMismatch(String),
    /// A newer operation started before this one resolved; its result was dropped.
    #[error("superseded by a newer session operation")]
    Superseded,
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        Self::Request(err.to_string())
    }
}

/// Owner of [`SessionState`] and the only writer to it.
#[derive(Clone)]
pub struct SessionMachine {
    state: RwSignal<SessionState>,
    api: Arc<dyn AuthApi>,
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    generation: Arc<AtomicU64>,
}

impl SessionMachine {
    pub fn new(api: Arc<dyn AuthApi>, tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            api,
            tokens,
            navigator,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// HTTP backend at `config.base_url`, browser token storage and navigation.
    pub fn browser(config: &ApiConfig) -> Self {
        Self::new(
            Arc::new(HttpAuthApi::new(config.clone())),
            TokenStore::browser(config.token_key.clone()),
            Arc::new(BrowserNavigator),
        )
    }

    /// Reactive handle for guards and views.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current state without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Take a ticket and enter `Loading`.
    fn start(&self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.update(SessionState::begin);
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Apply `transition` if `ticket` is still the newest operation.
    fn apply(&self, ticket: u64, op: &str, transition: impl FnOnce(&mut SessionState)) -> Result<(), SessionError> {
        if !self.is_current(ticket) {
            log::debug!("session: dropping stale {op} result (ticket {ticket})");
            return Err(SessionError::Superseded);
        }
        self.state.update(transition);
        Ok(())
    }

    /// Resolve the current session with the backend.
    ///
    /// The attempt starts (status `Loading`, error cleared) as soon as this is
    /// called; the returned future performs the request. A 401 is the normal
    /// answer for an anonymous visitor and resolves to `Ok(None)` with status
    /// `Succeeded`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Request`] on any other failure, after recording it in
    /// the state and clearing `user`.
    pub fn check_session(&self) -> impl Future<Output = Result<Option<User>, SessionError>> + use<> {
        let ticket = self.start();
        let this = self.clone();
        async move {
            let token = this.tokens.read();
            match this.api.check_auth(token.as_deref()).await {
                Ok(user) => {
                    this.apply(ticket, "check_session", |s| s.settle(Some(user.clone())))?;
                    log::debug!("session: signed in as {}", user.username);
                    Ok(Some(user))
                }
                Err(err) if err.is_unauthorized() => {
                    this.apply(ticket, "check_session", |s| s.settle(None))?;
                    Ok(None)
                }
                Err(err) => {
                    let message = err.to_string();
                    log::warn!("session check failed: {message}");
                    this.apply(ticket, "check_session", |s| s.fail_signed_out(message.clone()))?;
                    Err(SessionError::Request(message))
                }
            }
        }
    }

    /// Sign in with email and password, persisting the issued token.
    ///
    /// `user` is replaced by the identity in the response. Whether the
    /// response is complete enough to proceed is the caller's call; the token
    /// is only persisted when it comes with a full identity.
    ///
    /// # Errors
    ///
    /// [`SessionError::Request`] when the backend rejects the credentials or
    /// is unreachable; `user` is left unchanged.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, SessionError> {
        let ticket = self.start();
        let outcome = self.api.login(&credentials).await;
        drop(credentials);
        match outcome {
            Ok(response) => {
                let user = response.user();
                self.apply(ticket, "login", |s| s.settle(user.clone()))?;
                if let (Some(_), Some(token)) = (&user, response.token()) {
                    self.tokens.save(token);
                }
                Ok(response)
            }
            Err(err) => {
                let message = err.to_string();
                self.apply(ticket, "login", |s| s.fail(message.clone()))?;
                Err(SessionError::Request(message))
            }
        }
    }

    /// Create an account. Does not sign in; returns the server's message.
    ///
    /// # Errors
    ///
    /// [`SessionError::Request`] when the backend rejects the registration.
    pub async fn register(&self, registration: Registration) -> Result<String, SessionError> {
        let ticket = self.start();
        let outcome = self.api.register(&registration).await;
        drop(registration);
        match outcome {
            Ok(body) => {
                self.apply(ticket, "register", SessionState::succeed)?;
                Ok(body.message.unwrap_or_default())
            }
            Err(err) => {
                let message = err.to_string();
                self.apply(ticket, "register", |s| s.fail(message.clone()))?;
                Err(SessionError::Request(message))
            }
        }
    }

    /// End the session locally, telling the backend on a best-effort basis.
    ///
    /// The token is read for the bearer header and cleared before the request
    /// goes out, so it is gone whatever the outcome. Remote failures are
    /// logged and swallowed.
    pub async fn logout(&self) {
        let ticket = self.start();
        let token = self.tokens.read();
        self.tokens.clear();
        if let Err(err) = self.api.logout(token.as_deref()).await {
            log::warn!("logout request failed, local session cleared anyway: {err}");
        }
        let _ = self.apply(ticket, "logout", SessionState::reset);
    }

    /// Leave the app for the provider's OAuth entry point.
    ///
    /// There is no completion inside the app: the page is expected to unload.
    /// The flow resumes in [`Self::handle_oauth_callback`].
    pub fn initiate_oauth_login(&self, provider: OAuthProvider) {
        self.state.update(|s| {
            s.oauth_loading = true;
            s.error = None;
        });
        let url = self.api.oauth_entry_url(provider);
        log::debug!("session: handing off to {provider} at {url}");
        self.navigator.assign(&url);
    }

    /// Finish an OAuth sign-in using the token cookie the backend left behind.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingOAuthToken`] when no cookie is present (the
    /// backend is not contacted), [`SessionError::Request`] when the session
    /// check fails, including a 401.
    pub async fn handle_oauth_callback(&self) -> Result<User, SessionError> {
        let ticket = self.start();
        let Some(token) = self.tokens.read_cookie() else {
            let err = SessionError::MissingOAuthToken;
            self.state.update(|s| s.oauth_loading = false);
            self.apply(ticket, "oauth_callback", |s| s.fail_signed_out(err.to_string()))?;
            return Err(err);
        };
        self.tokens.save(&token);
        let outcome = self.api.check_auth(Some(&token)).await;
        self.state.update(|s| s.oauth_loading = false);
        match outcome {
            Ok(user) => {
                self.apply(ticket, "oauth_callback", |s| s.settle(Some(user.clone())))?;
                Ok(user)
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("oauth callback session check failed: {message}");
                self.apply(ticket, "oauth_callback", |s| s.fail_signed_out(message.clone()))?;
                Err(SessionError::Request(message))
            }
        }
    }

    /// Dismiss the recorded error without touching anything else.
    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }
}

impl std::fmt::Debug for SessionMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionMachine")
            .field("state", &self.snapshot())
            .field("tokens", &self.tokens)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
