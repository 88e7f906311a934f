use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::registry::EntityType;
use crate::services::session_context::use_session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub path: String,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Home, one entry per entity type, then sync.
pub fn nav_items() -> Vec<NavItem> {
    let mut items = vec![NavItem {
        path: "/".to_string(),
        label: "Inicio",
        icon: "🏠",
    }];
    items.extend(EntityType::ALL.iter().map(|entity| NavItem {
        path: entity.list_path(),
        label: entity.label(),
        icon: entity.icon(),
    }));
    items.push(NavItem {
        path: "/sync".to_string(),
        label: "Sincronización",
        icon: "🌌",
    });
    items
}

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    let items = nav_items()
        .into_iter()
        .map(|item| {
            let path = item.path.clone();
            let class = move || {
                let state = if is_active(&path, &pathname.get()) {
                    "bg-yellow-400/20 text-yellow-300"
                } else {
                    "text-slate-300 hover:text-white hover:bg-white/10"
                };
                format!("flex items-center gap-2 px-3 py-2 rounded transition-colors {state}")
            };
            view! {
                <a href=item.path class=class on:click=move |_| menu_open.set(false)>
                    <span>{item.icon}</span>
                    <span>{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="bg-slate-900/90 border-b border-slate-700 sticky top-0 z-40">
            <div class="max-w-6xl mx-auto px-4 flex flex-wrap items-center justify-between py-3">
                <a href="/" class="text-yellow-400 font-bold text-lg">"⭐ SWAPI Client"</a>
                <button
                    type="button"
                    class="md:hidden text-slate-200 px-2 py-1"
                    aria-label="Menú"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class=move || {
                    let visibility = if menu_open.get() { "flex" } else { "hidden" };
                    format!("{visibility} md:flex w-full md:w-auto flex-col md:flex-row md:items-center gap-1 mt-3 md:mt-0")
                }>
                    {items}
                    <button
                        type="button"
                        class="px-3 py-2 rounded text-red-300 hover:bg-red-500/20"
                        on:click=logout
                    >
                        "🚪 Cerrar Sesión"
                    </button>
                </div>
            </div>
        </nav>
    }
}
