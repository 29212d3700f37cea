//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state. It is owned by a single
//! `SessionMachine` provided through Leptos context rather than a global.

pub mod session;
