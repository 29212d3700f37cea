//! Transient success/error banner used by the auth forms.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), variant: NoticeVariant::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), variant: NoticeVariant::Error }
    }

    pub fn class(&self) -> &'static str {
        match self.variant {
            NoticeVariant::Success => "notice notice--success",
            NoticeVariant::Error => "notice notice--error",
        }
    }

    /// Class and message for the banner, consuming the notice.
    pub fn into_parts(self) -> (&'static str, String) {
        (self.class(), self.message)
    }
}

/// Renders the current notice, if any.
#[component]
pub fn Notification(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let (class, message) = n.into_parts();
            view! { <div class=class role="status">{message}</div> }
        })
    }
}
