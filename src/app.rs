use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::{event_channel, ApiClient, CatalogApi, Http};
use crate::components::entity_detail::EntityDetailPage;
use crate::components::entity_list::EntityListPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::route_guard::ProtectedLayout;
use crate::components::session_watcher::SessionWatcher;
use crate::components::sync::SyncPage;
use crate::config::AppConfig;
use crate::services::session::SessionStore;
use crate::services::session_context::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let http = Http::browser(config.request_timeout());
    let store = SessionStore::browser();
    let (events, event_stream) = event_channel();

    provide_session_context(store.clone());
    provide_context(ApiClient::new(http.clone(), config.api_base_url.clone(), store, events));
    provide_context(CatalogApi::new(http, config.catalog_base_url.clone()));
    provide_context(event_stream);
    provide_context(config);

    view! {
        <Router>
            <SessionWatcher />
            <div class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <ParentRoute path=path!("/") view=ProtectedLayout>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("sync") view=SyncPage />
                        <Route path=path!(":entity_type") view=EntityListPage />
                        <Route path=path!(":entity_type/:id") view=EntityDetailPage />
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}
