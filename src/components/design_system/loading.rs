use leptos::prelude::*;

pub(crate) fn spinner_size_class(size: &str) -> &'static str {
    match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    }
}

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} animate-spin rounded-full border-2 border-slate-600 border-t-yellow-400",
            spinner_size_class(size)
        )></div>
    }
}

/// Centered spinner with a caption, used while a view's data is in flight.
#[component]
pub fn LoadingMessage(
    #[prop(into, default = "Cargando...".to_string())]
    label: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-16 text-slate-400">
            <LoadingSpinner size="lg" />
            <span>{label}</span>
        </div>
    }
}
