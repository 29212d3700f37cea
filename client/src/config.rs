//! Build-time configuration for the REST collaborator.
//!
//! The WASM bundle cannot read the host environment at runtime, so the API
//! base URL is baked in at compile time from `RECEIPT_DESK_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Where the auth backend lives and which storage key holds the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
}

impl ApiConfig {
    /// Build a config for `base_url` with the default token key.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }

    /// Read `RECEIPT_DESK_API_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RECEIPT_DESK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}
