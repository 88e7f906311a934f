use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::design_system::{Alert, Button, Card, CardBody, Input};
use crate::api::ApiClient;
use crate::services::login::{login_error_message, validate};
use crate::services::session_context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let credentials = match validate(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        session.clear();

        let auth = client.auth();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(&credentials).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    error.set(Some(login_error_message(&e, auth.base_url())));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <Card class="w-full max-w-md">
                <CardBody class="flex flex-col gap-6 p-8">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold text-yellow-400">"SWAPI Client"</h1>
                        <p class="text-slate-400 mt-1">"Inicia sesión para continuar"</p>
                    </div>
                    <form class="flex flex-col gap-4" on:submit=on_submit>
                        <Input
                            id="email"
                            label="Email"
                            input_type="email"
                            required=true
                            value=email
                            disabled=submitting
                        />
                        <Input
                            id="password"
                            label="Contraseña"
                            input_type="password"
                            required=true
                            value=password
                            disabled=submitting
                        />
                        {move || error.get().map(|message| view! { <Alert message=message /> })}
                        <Button button_type="submit" loading=submitting class="w-full">
                            {move || if submitting.get() { "Iniciando..." } else { "Iniciar Sesión" }}
                        </Button>
                    </form>
                </CardBody>
            </Card>
        </div>
    }
}
