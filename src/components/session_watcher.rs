use futures::StreamExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api::{ApiEvent, ApiEventStream};
use crate::services::session_context::use_session;

/// Listens to the HTTP layer's events for the lifetime of the app and turns
/// them into navigation and alerts. Must be mounted inside the router.
#[component]
pub fn SessionWatcher() -> impl IntoView {
    let stream = expect_context::<ApiEventStream>();
    let session = use_session();
    let navigate = use_navigate();

    let Some(mut events) = stream.take() else {
        log::warn!("API event stream already taken; session watcher inactive");
        return;
    };

    spawn_local(async move {
        while let Some(event) = events.next().await {
            log::info!("API event: {:?}", event);
            if event == ApiEvent::Unauthenticated {
                session.clear();
            }
            if let Some(target) = event.redirect_target() {
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            if let Some(notice) = event.blocking_notice() {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(notice) {
                        log::warn!("Failed to show session notice: {:?}", e);
                    }
                }
            }
        }
    });
}
