//! Route guard policies shared by every gated route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated routes apply identical redirect behavior. The decision is a pure
//! function of [`SessionState`], so the components in
//! `components::route_guard` only translate it into views and never write
//! session state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
/// Where signed-in users land.
pub const LANDING_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Protected content: anonymous visitors go to the login page.
    RequireAuthenticated,
    /// Login/register forms: signed-in users go to the landing page.
    RedirectIfAuthenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A session operation is in flight; hold the decision.
    Placeholder,
    Redirect(&'static str),
    Render,
}

pub fn decide(policy: GuardPolicy, state: &SessionState) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Placeholder;
    }
    match (policy, state.is_authenticated()) {
        (GuardPolicy::RequireAuthenticated, false) => GuardDecision::Redirect(LOGIN_PATH),
        (GuardPolicy::RedirectIfAuthenticated, true) => GuardDecision::Redirect(LANDING_PATH),
        _ => GuardDecision::Render,
    }
}
