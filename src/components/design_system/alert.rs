use leptos::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
}

impl AlertKind {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "bg-red-950/80 border-red-500 text-red-200",
            AlertKind::Success => "bg-emerald-950/80 border-emerald-500 text-emerald-200",
        }
    }

    pub(crate) fn icon(&self) -> &'static str {
        match self {
            AlertKind::Error => "⚠️",
            AlertKind::Success => "✅",
        }
    }
}

/// Inline notice. Shows a close button when `on_dismiss` is given.
#[component]
pub fn Alert(
    #[prop(optional)]
    kind: AlertKind,
    #[prop(into)]
    message: String,
    #[prop(into, optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class=format!("flex items-start gap-3 p-3 rounded border-l-4 {}", kind.class())
            role="alert"
        >
            <span class="flex-shrink-0">{kind.icon()}</span>
            <span class="flex-1 break-words">{message}</span>
            {on_dismiss.map(|dismiss| view! {
                <button
                    type="button"
                    class="text-current opacity-70 hover:opacity-100"
                    aria-label="Cerrar"
                    on:click=move |_| dismiss.run(())
                >
                    "✕"
                </button>
            })}
        </div>
    }
}
