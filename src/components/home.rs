use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use super::design_system::{ButtonVariant, Card, CardBody};
use crate::registry::EntityType;
use crate::services::session::User;
use crate::services::session_context::use_session;
use crate::utils::formatting::{format_last_login, PLACEHOLDER};

/// Text of the welcome panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Welcome {
    pub greeting: String,
    pub role: String,
    pub last_access: String,
}

impl Welcome {
    pub fn for_user(user: &User) -> Self {
        Self {
            greeting: format!("Bienvenido, {}", user.name.as_deref().unwrap_or_default()),
            role: user.role.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            last_access: format_last_login(user.last_login_at.as_deref()),
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.user() {
            Some(user) => view! { <WelcomePanel user=user /> }.into_any(),
            None => view! { <Redirect path="/login" /> }.into_any(),
        }}
    }
}

#[component]
fn WelcomePanel(user: User) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let welcome = Welcome::for_user(&user);

    let logout = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    let cards = EntityType::ALL
        .iter()
        .map(|entity| {
            view! {
                <a
                    href=entity.list_path()
                    class="flex flex-col items-center gap-2 p-6 rounded-lg bg-slate-900/80 border border-slate-700 hover:border-yellow-400 hover:-translate-y-1 transition-all"
                >
                    <span class="text-4xl">{entity.icon()}</span>
                    <h4 class="text-lg font-semibold text-slate-100">{entity.label()}</h4>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-8">
            <header class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-yellow-400">"SWAPI Client"</h1>
                <button
                    type="button"
                    class=format!("px-4 py-2 rounded font-medium {}", ButtonVariant::Secondary.class())
                    on:click=logout
                >
                    "Cerrar Sesión"
                </button>
            </header>

            <Card>
                <CardBody class="flex flex-col gap-2">
                    <h2 class="text-2xl font-semibold text-white">{welcome.greeting}</h2>
                    <p class="text-slate-300">
                        <strong>"Tu Rol: "</strong>{welcome.role}
                    </p>
                    <p class="text-slate-300">
                        <strong>"Último acceso: "</strong>{welcome.last_access}
                    </p>
                </CardBody>
            </Card>

            <section class="flex flex-col gap-4">
                <h3 class="text-xl font-semibold text-slate-200">"Explorar Entidades"</h3>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">{cards}</div>
            </section>
        </div>
    }
}
