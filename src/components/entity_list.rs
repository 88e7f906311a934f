use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use super::design_system::{Button, ButtonVariant, LoadingMessage};
use crate::api::{ApiClient, Pagination};
use crate::services::entity_browser::{load_page, ListPage, ViewError};
use crate::services::latest_request::LatestRequest;

#[derive(Params, PartialEq, Clone, Default)]
pub struct EntityListParams {
    pub entity_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Ready(ListPage),
    Failed(ViewError),
}

#[component]
pub fn EntityListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params::<EntityListParams>();
    let slug = Memo::new(move |_| {
        params.get()
            .ok()
            .and_then(|p| p.entity_type)
            .unwrap_or_default()
    });

    let page = RwSignal::new(1_u32);
    let state = RwSignal::new(ListState::Loading);
    let latest = LatestRequest::new();

    // Another entity type starts over at page 1.
    Effect::new(move |previous: Option<String>| {
        let current = slug.get();
        if previous.is_some_and(|previous| previous != current) {
            page.set(1);
        }
        current
    });

    Effect::new(move |_| {
        let slug = slug.get();
        let page = page.get();
        let client = client.clone();

        let ticket = latest.begin();
        state.set(ListState::Loading);

        spawn_local(async move {
            let result = load_page(&client, &slug, page).await;
            if !latest.is_current(ticket) {
                return;
            }
            state.set(match result {
                Ok(list) => ListState::Ready(list),
                Err(e) => {
                    log::error!("{}", e);
                    ListState::Failed(e)
                }
            });
        });
    });

    let go_to = move |target: Option<u32>| {
        if let Some(target) = target {
            page.set(target);
        }
    };

    move || match state.get() {
        ListState::Loading => view! { <LoadingMessage /> }.into_any(),
        ListState::Failed(error) => view! {
            <div class="flex flex-col items-center gap-4 py-16">
                <p class="text-red-300">{error.to_string()}</p>
                <a href="/" class="text-yellow-400 hover:underline">"Volver al inicio"</a>
            </div>
        }
        .into_any(),
        ListState::Ready(list) => view! { <EntityTable list=list on_page=Callback::new(go_to) /> }.into_any(),
    }
}

#[component]
fn EntityTable(list: ListPage, on_page: Callback<Option<u32>>) -> impl IntoView {
    let pagination: Pagination = list.pagination;
    let entity = list.entity;
    let total_label = list.total_label();
    let page_label = list.page_label();

    let headers = list
        .headers
        .into_iter()
        .map(|header| view! { <th class="px-4 py-3 text-left">{header}</th> })
        .collect_view();

    let rows = list
        .rows
        .into_iter()
        .map(|row| {
            let cells = row
                .cells
                .into_iter()
                .map(|cell| view! { <td class="px-4 py-3">{cell}</td> })
                .collect_view();
            view! {
                <tr class="border-t border-slate-800 hover:bg-slate-800/50">
                    {cells}
                    <td class="px-4 py-3">
                        {row.detail_path.map(|path| view! {
                            <a href=path class="text-yellow-400 hover:underline">"Ver detalle"</a>
                        })}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-6">
            <header class="flex items-center gap-4">
                <a href="/" class="text-slate-400 hover:text-white">"← Volver"</a>
                <h1 class="text-3xl font-bold text-yellow-400">
                    {entity.icon()} " " {entity.label()}
                </h1>
            </header>

            <p class="text-slate-400">{total_label}</p>

            <div class="overflow-x-auto rounded-lg border border-slate-700">
                <table class="w-full text-sm text-slate-200">
                    <thead class="bg-slate-800 text-slate-300">
                        <tr>
                            {headers}
                            <th class="px-4 py-3 text-left">"ACCIONES"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <div class="flex items-center justify-center gap-4">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=!pagination.has_previous()
                    on_click=move |_| on_page.run(pagination.previous())
                >
                    "← Anterior"
                </Button>
                <span class="text-slate-300">{page_label}</span>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=!pagination.has_next()
                    on_click=move |_| on_page.run(pagination.next())
                >
                    "Siguiente →"
                </Button>
            </div>
        </div>
    }
}
