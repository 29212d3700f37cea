//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionMachine;
use crate::util::guard::{LANDING_PATH, LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<SessionMachine>().state();
    let signed_in = move || state.with(|s| s.is_authenticated());

    view! {
        <div class="home">
            <h1>"Receipt Desk"</h1>
            <p class="home__tagline">"Upload receipts, get the line items back."</p>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <nav class="home__actions">
                            <A href=LOGIN_PATH>"Sign in"</A>
                            <A href=REGISTER_PATH>"Create an account"</A>
                        </nav>
                    }
                }
            >
                <nav class="home__actions">
                    <A href=LANDING_PATH>"Go to dashboard"</A>
                </nav>
            </Show>
        </div>
    }
}
