//! Full-page navigation, used for OAuth hand-off.
//!
//! Router navigation stays inside the app; this is for leaving it.

/// Something that can send the browser to another document.
pub trait Navigator: Send + Sync {
    fn assign(&self, url: &str);
}

/// Sets `window.location.href`. No-op off the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn assign(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
