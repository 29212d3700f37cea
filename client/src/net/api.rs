//! REST client for the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending cookies
//! along with an optional bearer header.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`], since the session only lives in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are mapped to [`ApiError`] with the server's `message`
//! surfaced verbatim when the body carries one. A 401 keeps its own variant
//! so the session check can treat it as "anonymous" rather than a failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, LoginResponse, MessageResponse, OAuthProvider, Registration, User};
use crate::config::ApiConfig;

pub const CHECK_AUTH_PATH: &str = "/auth/checkAuth";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Failure talking to the auth backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{}", message.as_deref().unwrap_or("unauthorized"))]
    Unauthorized { message: Option<String> },
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-2xx status and its raw body to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_message_from_body(body);
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message: message.unwrap_or_else(|| request_failed_message(status)) }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Pull a non-empty `message` field out of a JSON error body.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The auth backend as seen by the session machine. Enables mocking in tests.
#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// "Who am I": resolve the session behind `token` (or the cookie jar).
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for an anonymous visitor, other variants for
    /// transport or server failures.
    async fn check_auth(&self, token: Option<&str>) -> Result<User, ApiError>;

    /// Exchange credentials for a token and identity.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the backend rejects the credentials or is unreachable.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Create an account. Does not sign the caller in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the backend rejects the registration or is unreachable.
    async fn register(&self, registration: &Registration) -> Result<MessageResponse, ApiError>;

    /// End the remote session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx response or transport failure.
    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError>;

    /// Full-page URL that starts the provider's OAuth flow.
    fn oauth_entry_url(&self, provider: OAuthProvider) -> String;
}

/// [`AuthApi`] over HTTP with `gloo-net`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "hydrate")]
fn request(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn check_auth(&self, token: Option<&str>) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(CHECK_AUTH_PATH);
            let resp = request(gloo_net::http::Request::get(&url), token)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            let resp = request(gloo_net::http::Request::post(&url), None)
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, registration: &Registration) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(REGISTER_PATH);
            let resp = request(gloo_net::http::Request::post(&url), None)
                .json(registration)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGOUT_PATH);
            let resp = request(gloo_net::http::Request::post(&url), token)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::from_status(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    fn oauth_entry_url(&self, provider: OAuthProvider) -> String {
        self.config.endpoint(&format!("{LOGIN_PATH}/{}", provider.as_str()))
    }
}
