use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown. Options are `(value, label)` pairs.
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    options: Vec<(String, String)>,
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    #[prop(into, optional)]
    id: String,
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full bg-slate-950 border border-slate-700 rounded p-2 text-white focus:outline-none focus:ring-2 focus:ring-yellow-400/50 focus:border-yellow-400";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        if let Some(callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select
            id=id
            class=full_class
            disabled=move || disabled.get()
            on:change=handle_change
            prop:value=move || value.get()
        >
            {options
                .into_iter()
                .map(|(option_value, text)| {
                    let selected_value = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == selected_value>
                            {text}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
