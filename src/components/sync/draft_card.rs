use leptos::prelude::*;

use crate::components::design_system::{Button, Card, CardBody, CardHeader};
use crate::services::sync_state::{SyncDraft, SyncState};

/// Caption under the draft title: `Personas • ID: 4`.
pub fn draft_caption(draft: &SyncDraft) -> String {
    format!("{} • ID: {}", draft.entity.label(), draft.external_id)
}

pub fn sync_button_label(state: &SyncState) -> &'static str {
    if state.is_success_showing() {
        "✅ Sincronizado"
    } else if state.syncing {
        "Sincronizando..."
    } else {
        "💾 Guardar en Base de Datos"
    }
}

#[component]
pub fn DraftCard(state: RwSignal<SyncState>, on_sync: Callback<()>) -> impl IntoView {
    let draft = Memo::new(move |_| state.with(|s| s.draft.clone()));
    let searching = Memo::new(move |_| state.with(|s| s.searching));

    move || {
        if searching.get() {
            return view! {
                <Card>
                    <CardBody class="flex flex-col gap-3 animate-pulse">
                        <div class="h-6 w-1/2 rounded bg-slate-700"></div>
                        <div class="h-4 w-full rounded bg-slate-800"></div>
                        <div class="h-4 w-5/6 rounded bg-slate-800"></div>
                        <div class="h-4 w-2/3 rounded bg-slate-800"></div>
                    </CardBody>
                </Card>
            }
            .into_any();
        }

        match draft.get() {
            None => view! {
                <Card>
                    <CardBody class="flex flex-col items-center gap-2 py-12 text-slate-400">
                        <span class="text-4xl">"📡"</span>
                        <p class="text-slate-200">"Esperando transmisión..."</p>
                        <p class="text-sm">"Busca o selecciona un elemento para ver una vista previa"</p>
                    </CardBody>
                </Card>
            }
            .into_any(),
            Some(draft) => {
                let title = draft.title();
                let caption = draft_caption(&draft);
                let json = draft.pretty_json();
                view! {
                    <Card>
                        <CardHeader
                            title=title
                            subtitle=caption
                            title_class="text-xl font-semibold text-yellow-400"
                        />
                        <CardBody>
                            <pre class="max-h-96 overflow-auto text-xs text-emerald-200 bg-slate-950 rounded p-3">
                                {json}
                            </pre>
                        </CardBody>
                        <div class="px-4 pb-4">
                            <Button
                                class="w-full"
                                disabled=Signal::derive(move || !state.with(SyncState::can_sync))
                                loading=Signal::derive(move || state.with(|s| s.syncing))
                                on_click=move |_| on_sync.run(())
                            >
                                {move || state.with(sync_button_label)}
                            </Button>
                        </div>
                    </Card>
                }
                .into_any()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CatalogItem;
    use serde_json::json;

    fn drafted() -> SyncState {
        let mut state = SyncState::default();
        let item = CatalogItem::from_record(
            json!({"name": "Yoda", "url": "https://swapi.dev/api/people/20/"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        state.select_card(&item);
        state
    }

    #[test]
    fn test_caption() {
        let state = drafted();
        assert_eq!(draft_caption(state.draft.as_ref().unwrap()), "Personas • ID: 20");
    }

    #[test]
    fn test_header_text() {
        let state = drafted();
        let draft = state.draft.as_ref().unwrap();
        assert_eq!(draft.title(), "Yoda");
        assert!(draft.pretty_json().contains("\"name\": \"Yoda\""));
    }

    #[test]
    fn test_button_label_follows_state() {
        let mut state = drafted();
        assert_eq!(sync_button_label(&state), "💾 Guardar en Base de Datos");
        state.begin_sync();
        assert_eq!(sync_button_label(&state), "Sincronizando...");
        state.finish_sync(Ok(json!(null)));
        assert_eq!(sync_button_label(&state), "✅ Sincronizado");
    }
}
