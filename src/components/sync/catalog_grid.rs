use leptos::prelude::*;

use crate::api::CatalogItem;
use crate::components::design_system::{Alert, LoadingMessage};
use crate::registry::EntityType;
use crate::services::sync_state::{CatalogState, SyncState};

const SUMMARY_FIELDS: usize = 2;

#[component]
pub fn CatalogGrid(
    state: RwSignal<SyncState>,
    on_select: Callback<CatalogItem>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let catalog = Memo::new(move |_| state.with(|s| s.catalog.clone()));
    let selected_id = Memo::new(move |_| {
        state.with(|s| s.draft.as_ref().map(|d| d.external_id.clone()))
    });

    view! {
        <section class="flex flex-col gap-4">
            <h2 class="text-xl font-semibold text-slate-200">
                {move || format!("Catálogo de {}", state.with(|s| s.entity.label()))}
            </h2>
            {move || {
                let entity = state.with_untracked(|s| s.entity);
                match catalog.get() {
                    CatalogState::Idle => ().into_any(),
                    CatalogState::Loading(_) => view! { <LoadingMessage label="Cargando catálogo..." /> }.into_any(),
                    CatalogState::Failed(message) => view! {
                        <Alert message=message on_dismiss=on_dismiss />
                    }
                    .into_any(),
                    CatalogState::Loaded(items) if items.is_empty() => view! {
                        <p class="text-slate-400">"No hay elementos en el catálogo."</p>
                    }
                    .into_any(),
                    CatalogState::Loaded(items) => view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            {items
                                .into_iter()
                                .map(|item| view! {
                                    <CatalogCard
                                        entity=entity
                                        item=item
                                        selected_id=selected_id
                                        on_select=on_select
                                    />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn CatalogCard(
    entity: EntityType,
    item: CatalogItem,
    selected_id: Memo<Option<String>>,
    on_select: Callback<CatalogItem>,
) -> impl IntoView {
    let selectable = item.is_selectable();
    let id_text = item.id.map(|id| id.to_string());
    let caption = match &id_text {
        Some(id) => format!("ID: {}", id),
        None => "Sin ID".to_string(),
    };
    let summary = item
        .summary(entity, SUMMARY_FIELDS)
        .into_iter()
        .map(|(field, value)| view! {
            <p class="text-sm text-slate-400">
                <span class="text-slate-500">{field} ": "</span>{value}
            </p>
        })
        .collect_view();
    let title = item.title.clone();

    let class = move || {
        let highlight = if id_text.is_some() && selected_id.get() == id_text {
            "border-yellow-400"
        } else {
            "border-slate-700"
        };
        let cursor = if selectable { "cursor-pointer hover:border-yellow-300" } else { "opacity-50 cursor-not-allowed" };
        format!("text-left flex flex-col gap-1 p-4 rounded-lg bg-slate-900/80 border {highlight} {cursor}")
    };

    view! {
        <button
            type="button"
            class=class
            disabled=!selectable
            title=if selectable { "" } else { "No se pudo determinar el ID de este elemento" }
            on:click=move |_| on_select.run(item.clone())
        >
            <h3 class="font-semibold text-slate-100">{title}</h3>
            <p class="text-xs text-yellow-400">{caption}</p>
            {summary}
        </button>
    }
}
