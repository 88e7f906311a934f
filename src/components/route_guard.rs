use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use super::nav_bar::NavBar;
use crate::services::session_context::use_session;

/// Renders its children only while a session token is present. Clearing the
/// session swaps the children for a redirect to `/login`.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Shell of every protected page: guard, navigation bar and the matched
/// child route.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireSession>
            <NavBar />
            <main class="max-w-6xl mx-auto px-4 py-8">
                <Outlet />
            </main>
        </RequireSession>
    }
}
