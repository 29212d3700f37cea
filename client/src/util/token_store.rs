//! Bearer-token persistence across `localStorage` and a cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session machine writes the token through [`TokenStore`], a two-backend
//! write-through cache: every save lands in both the durable slot and the
//! cookie so either one surviving is enough to resume the session. Reads
//! prefer the durable slot and fall back to the cookie.
//!
//! TRADE-OFFS
//! ==========
//! Browser backends are best-effort: storage access can be denied (private
//! mode, sandboxed iframes), in which case writes are dropped and reads come
//! back empty. SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single key-value location the token can live in.
pub trait TokenBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local backend used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Browser `document.cookie`, scoped to path `/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieBackend;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl TokenBackend for CookieBackend {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?.cookie().ok()?;
            find_cookie(&header, key)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie_assignment(key, value));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&expired_cookie(key));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`).
///
/// Surrounding whitespace and double quotes are stripped; an empty value is
/// treated as absent.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| k.trim() == name)
        .map(|(_, v)| v.trim().trim_matches('"').to_owned())
        .filter(|v| !v.is_empty())
}

/// `Set-Cookie` style assignment for `document.cookie`.
pub fn cookie_assignment(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; SameSite=Lax")
}

/// Assignment that deletes `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; SameSite=Lax")
}

/// Write-through token cache over a durable slot and a cookie.
#[derive(Clone)]
pub struct TokenStore {
    durable: Arc<dyn TokenBackend>,
    cookie: Arc<dyn TokenBackend>,
    key: String,
}

impl TokenStore {
    pub fn new(durable: Arc<dyn TokenBackend>, cookie: Arc<dyn TokenBackend>, key: impl Into<String>) -> Self {
        Self { durable, cookie, key: key.into() }
    }

    /// `localStorage` + `document.cookie`.
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(Arc::new(LocalStorageBackend), Arc::new(CookieBackend), key)
    }

    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryBackend::new()), Arc::new(MemoryBackend::new()), key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `token` to both backends.
    pub fn save(&self, token: &str) {
        self.durable.write(&self.key, token);
        self.cookie.write(&self.key, token);
    }

    /// The durable token if present, otherwise the cookie token.
    pub fn read(&self) -> Option<String> {
        non_empty(self.durable.read(&self.key)).or_else(|| self.read_cookie())
    }

    /// Only the cookie copy, as deposited by a server-side redirect.
    pub fn read_cookie(&self) -> Option<String> {
        non_empty(self.cookie.read(&self.key))
    }

    /// Remove the token from both backends. Clearing an absent token is a no-op.
    pub fn clear(&self) {
        self.durable.remove(&self.key);
        self.cookie.remove(&self.key);
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").field("key", &self.key).finish_non_exhaustive()
    }
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
