//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; only the user menu
//! triggers a session operation (logout).

pub mod notification;
pub mod route_guard;
pub mod user_menu;
