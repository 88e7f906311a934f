//! Sync view: browse or search the public catalog and copy a record into the
//! local backend.

mod catalog_grid;
mod draft_card;
mod search_panel;

use leptos::prelude::*;
use leptos::task::spawn_local;

pub use catalog_grid::CatalogGrid;
pub use draft_card::DraftCard;
pub use search_panel::SearchPanel;

use super::design_system::{Alert, AlertKind};
use crate::api::{ApiClient, CatalogApi, CatalogItem};
use crate::config::AppConfig;
use crate::registry::EntityType;
use crate::services::sync_state::{SyncState, SYNC_SUCCEEDED};

#[component]
pub fn SyncPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let catalog = expect_context::<CatalogApi>();
    let notice = expect_context::<AppConfig>().sync_notice();

    let state = RwSignal::new(SyncState::default());

    let load_catalog = {
        let catalog = catalog.clone();
        Callback::new(move |entity: EntityType| {
            state.update(|s| s.select_entity(entity));
            let catalog = catalog.clone();
            spawn_local(async move {
                let result = catalog.list(entity).await;
                state.update(|s| {
                    s.finish_catalog(entity, result);
                });
            });
        })
    };

    let on_entity = Callback::new(move |slug: String| match EntityType::from_slug(&slug) {
        Some(entity) => load_catalog.run(entity),
        None => log::warn!("Ignoring unknown entity '{}'", slug),
    });

    let on_search = {
        let catalog = catalog.clone();
        Callback::new(move |_: ()| {
            let mut lookup = None;
            state.update(|s| lookup = s.begin_search());
            let Some((entity, id)) = lookup else {
                return;
            };
            let catalog = catalog.clone();
            spawn_local(async move {
                let result = catalog.fetch(entity, &id).await;
                state.update(|s| s.finish_search(entity, &id, result));
            });
        })
    };

    let on_select = Callback::new(move |item: CatalogItem| {
        state.update(|s| {
            if !s.select_card(&item) {
                log::warn!("Catalog card '{}' has no id; not selectable", item.title);
            }
        });
    });

    let on_sync = Callback::new(move |_: ()| {
        let mut pending = None;
        state.update(|s| pending = s.begin_sync());
        let Some(request) = pending else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let result = client.sync_record(&request).await;
            let mut finished = None;
            state.update(|s| finished = s.finish_sync(result));
            if let Some(generation) = finished {
                set_timeout(
                    move || {
                        state.update(|s| {
                            s.expire_success(generation);
                        });
                    },
                    notice,
                );
            }
        });
    });

    load_catalog.run(state.get_untracked().entity);

    let dismiss_search = Callback::new(move |_: ()| state.update(SyncState::dismiss_search_error));
    let dismiss_sync = Callback::new(move |_: ()| state.update(SyncState::dismiss_sync_error));
    let dismiss_catalog = Callback::new(move |_: ()| state.update(SyncState::dismiss_catalog_error));

    view! {
        <div class="flex flex-col gap-6">
            <header>
                <h1 class="text-3xl font-bold text-yellow-400">"🌌 Sincronización Galáctica"</h1>
                <p class="text-slate-400">
                    "Busca datos en SWAPI y sincronízalos con tu base de datos local"
                </p>
            </header>

            {move || state.with(|s| s.search_error.clone()).map(|message| view! {
                <Alert message=message on_dismiss=dismiss_search />
            })}
            {move || state.with(|s| s.sync_error.clone()).map(|message| view! {
                <Alert message=message on_dismiss=dismiss_sync />
            })}
            <Show when=move || state.with(SyncState::is_success_showing)>
                <Alert kind=AlertKind::Success message=SYNC_SUCCEEDED />
            </Show>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <SearchPanel state=state on_entity=on_entity on_search=on_search />
                <div class="lg:col-span-2">
                    <DraftCard state=state on_sync=on_sync />
                </div>
            </div>

            <CatalogGrid state=state on_select=on_select on_dismiss=dismiss_catalog />
        </div>
    }
}
