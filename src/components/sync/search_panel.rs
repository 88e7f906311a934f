use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, Card, CardBody, CardHeader, Input, Select};
use crate::registry::EntityType;
use crate::services::sync_state::SyncState;

/// `(slug, label)` options of the entity selector.
pub fn entity_options() -> Vec<(String, String)> {
    EntityType::SYNC_ORDER
        .iter()
        .map(|entity| (entity.slug().to_string(), entity.label().to_string()))
        .collect()
}

#[component]
pub fn SearchPanel(
    state: RwSignal<SyncState>,
    on_entity: Callback<String>,
    on_search: Callback<()>,
) -> impl IntoView {
    let search_id = RwSignal::new(String::new());
    let searching = Signal::derive(move || state.with(|s| s.searching));
    let selected = Signal::derive(move || state.with(|s| s.entity.slug().to_string()));

    // Keep the input in step with ids set by card selection or expiry.
    Effect::new(move |_| {
        let id = state.with(|s| s.search_id.clone());
        if search_id.get_untracked() != id {
            search_id.set(id);
        }
    });
    Effect::new(move |_| {
        let typed = search_id.get();
        if state.with_untracked(|s| s.search_id != typed) {
            state.update(|s| s.search_id = typed);
        }
    });

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        on_search.run(());
    };

    view! {
        <Card>
            <CardHeader title="Búsqueda" />
            <CardBody>
                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <div class="flex flex-col gap-1">
                        <label for="entity" class="text-sm font-medium text-slate-300">"Entidad"</label>
                        <Select
                            id="entity"
                            value=selected
                            options=entity_options()
                            on_change=on_entity
                            disabled=searching
                        />
                    </div>
                    <Input
                        id="id"
                        label="ID"
                        input_type="number"
                        placeholder="Ej: 1"
                        value=search_id
                        disabled=searching
                    />
                    <Button button_type="submit" loading=searching class="w-full">
                        {move || if searching.get() { "Buscando..." } else { "🔍 Buscar" }}
                    </Button>
                </form>
            </CardBody>
        </Card>
    }
}
