use leptos::ev;
use leptos::prelude::*;

/// A labelled text input bound to a signal.
#[component]
pub fn Input(
    /// Two-way binding
    #[prop(into)]
    value: RwSignal<String>,
    #[prop(into, optional)]
    id: String,
    #[prop(into, optional)]
    label: Option<String>,
    #[prop(into, optional)]
    placeholder: String,
    /// text, password, email...
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    required: bool,
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full p-2 rounded bg-slate-950 text-white border border-slate-700 focus:border-yellow-400 focus:ring-1 focus:ring-yellow-400 outline-none transition-colors placeholder-slate-500 disabled:opacity-50 disabled:cursor-not-allowed";
    let full_class = format!("{base_class} {class}");
    let label_for = id.clone();

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <div class="flex flex-col gap-1">
            {label.map(|text| view! {
                <label for=label_for class="text-sm font-medium text-slate-300">{text}</label>
            })}
            <input
                id=id
                class=full_class
                type=input_type
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=handle_input
            />
        </div>
    }
}
