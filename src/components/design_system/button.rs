use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-yellow-400 hover:bg-yellow-300 text-slate-950 shadow-lg shadow-yellow-900/40 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-slate-700 hover:bg-slate-600 text-slate-100 border border-slate-600"
            }
        }
    }
}

/// A styled button. Clicks are swallowed while disabled or loading.
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Shows a spinner and disables the button
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// `button` or `submit`
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "px-4 py-2 rounded transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950 focus:ring-yellow-400";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if is_disabled() {
            return;
        }
        if let Some(callback) = on_click {
            callback.run(evt);
        }
    };

    view! {
        <button
            type=button_type
            class=full_class
            on:click=handle_click
            disabled=is_disabled
        >
            <Show when=move || loading.get()>
                <LoadingSpinner size="sm" />
            </Show>
            {children()}
        </button>
    }
}
