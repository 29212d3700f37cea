//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, cookies, navigation)
//! and pure routing policy from page and component logic to improve reuse
//! and testability.

pub mod guard;
pub mod navigation;
pub mod token_store;
