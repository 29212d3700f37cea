//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, notices, navigation
//! after a session operation) and delegates session changes to the
//! `SessionMachine` in context.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
