//! Route guard components wrapping gated pages.
//!
//! Both guards read the session reactively and render one of: a loading
//! placeholder, a router redirect, or their children.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionMachine;
use crate::util::guard::{self, GuardDecision, GuardPolicy};

/// Render children only for a signed-in user; otherwise go to the login page.
#[component]
pub fn RequireAuthenticated(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::RequireAuthenticated, children)
}

/// Render children only for an anonymous visitor; otherwise go to the landing page.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::RedirectIfAuthenticated, children)
}

fn guarded(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionMachine>().state();
    let decision = Memo::new(move |_| state.with(|s| guard::decide(policy, s)));

    move || match decision.get() {
        GuardDecision::Placeholder => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
