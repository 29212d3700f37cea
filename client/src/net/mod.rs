//! Networking modules for the auth REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP calls and error mapping, `types` defines the JSON
//! shapes exchanged with the backend.

pub mod api;
pub mod types;
