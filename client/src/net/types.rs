//! Wire DTOs for the auth backend.
//!
//! DESIGN
//! ======
//! Response types are lenient: optional fields default instead of failing
//! deserialization, so an incomplete login payload reaches the caller and can
//! be rejected there with a readable message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by `/auth/checkAuth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    pub username: String,
    pub email: String,
    /// Identity provider for OAuth accounts (e.g. `"google"`).
    #[serde(default, rename = "authProvider", alias = "auth_provider", skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<String>,
    /// Profile picture URL, if one has been uploaded.
    #[serde(default, rename = "profilePicture", alias = "profile_picture", skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Email + password pair sent to `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).field("password", &"<redacted>").finish()
    }
}

/// Sign-up payload sent to `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a login response. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl LoginResponse {
    /// The identity carried by the response, if all identity fields are present.
    pub fn user(&self) -> Option<User> {
        Some(User {
            id: self.id.clone()?,
            username: self.username.clone()?,
            email: self.email.clone()?,
            auth_provider: None,
            profile_picture: None,
        })
    }

    /// Non-empty bearer token, if the backend issued one.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Whether the response carries a message, a token and a full identity.
    pub fn is_complete(&self) -> bool {
        self.message.is_some() && self.token().is_some() && self.user().is_some()
    }
}

/// `{ "message": ... }` body used by register and by error responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// External identity providers the backend can hand off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    /// Path segment used in `/auth/login/{provider}`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    /// Human-readable name for buttons and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::GitHub),
            other => Err(format!("unknown OAuth provider: {other}")),
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
