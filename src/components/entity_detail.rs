use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use super::design_system::{Card, CardBody, CardHeader, LoadingMessage};
use crate::api::ApiClient;
use crate::services::entity_browser::{load_detail, DetailView, ViewError};
use crate::services::latest_request::LatestRequest;

#[derive(Params, PartialEq, Clone, Default)]
pub struct EntityDetailParams {
    pub entity_type: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Ready(DetailView),
    Failed(ViewError),
}

#[component]
pub fn EntityDetailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params::<EntityDetailParams>();
    let route = Memo::new(move |_| {
        let params = params.get().unwrap_or_default();
        (
            params.entity_type.unwrap_or_default(),
            params.id.unwrap_or_default(),
        )
    });
    let state = RwSignal::new(DetailState::Loading);
    let latest = LatestRequest::new();

    Effect::new(move |_| {
        let (slug, id) = route.get();
        let client = client.clone();
        let ticket = latest.begin();
        state.set(DetailState::Loading);

        spawn_local(async move {
            let result = load_detail(&client, &slug, &id).await;
            if !latest.is_current(ticket) {
                return;
            }
            state.set(match result {
                Ok(detail) => DetailState::Ready(detail),
                Err(e) => {
                    log::error!("{}", e);
                    DetailState::Failed(e)
                }
            });
        });
    });

    move || match state.get() {
        DetailState::Loading => view! { <LoadingMessage label="Cargando detalle..." /> }.into_any(),
        DetailState::Failed(error) => {
            let back = format!("/{}", route.try_get_untracked().map(|(slug, _)| slug).unwrap_or_default());
            view! {
                <div class="flex flex-col items-center gap-4 py-16">
                    <p class="text-red-300">{error.to_string()}</p>
                    <a href=back class="text-yellow-400 hover:underline">"Volver a la lista"</a>
                </div>
            }
            .into_any()
        }
        DetailState::Ready(detail) => view! { <DetailCard detail=detail /> }.into_any(),
    }
}

#[component]
fn DetailCard(detail: DetailView) -> impl IntoView {
    let back_label = detail.back_label();
    let section_title = detail.section_title();
    let back_path = detail.entity.list_path();

    let items = detail
        .rows
        .into_iter()
        .map(|row| {
            view! {
                <div class="flex flex-col gap-1 p-3 rounded bg-slate-950/60">
                    <span class="text-xs uppercase tracking-wide text-slate-400">{row.label} ":"</span>
                    <span class="text-slate-100 break-words">{row.value}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-6">
            <header class="flex flex-col gap-2">
                <a href=back_path class="text-slate-400 hover:text-white">{back_label}</a>
                <h1 class="text-3xl font-bold text-yellow-400">{detail.heading}</h1>
            </header>
            <Card>
                <CardHeader title=section_title />
                <CardBody class="grid grid-cols-1 md:grid-cols-2 gap-3">{items}</CardBody>
            </Card>
        </div>
    }
}
