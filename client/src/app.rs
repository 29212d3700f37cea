//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{RedirectIfAuthenticated, RequireAuthenticated};
use crate::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionMachine;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session machine, provides it to every route, and starts the
/// one bootstrap session check. The check enters `Loading` synchronously so
/// server render and hydration agree on the guards' placeholder; only the
/// browser actually performs the request.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionMachine::browser(&ApiConfig::from_build_env());
    provide_context(session.clone());

    let bootstrap = session.check_session();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let _ = bootstrap.await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(bootstrap);

    view! {
        <Stylesheet id="leptos" href="/pkg/receipt-desk.css"/>
        <Title text="Receipt Desk"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"))
                    view=|| view! { <RedirectIfAuthenticated><LoginPage/></RedirectIfAuthenticated> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("register"))
                    view=|| view! { <RedirectIfAuthenticated><RegisterPage/></RedirectIfAuthenticated> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuthenticated><DashboardPage/></RequireAuthenticated> }
                />
            </Routes>
        </Router>
    }
}
