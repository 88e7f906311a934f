//! Panels used by the detail page and the sync console.

use leptos::prelude::*;

const PANEL: &str = "bg-slate-900/80 border border-slate-700 rounded-lg shadow-md overflow-hidden";
const HEADER: &str = "px-4 py-3 bg-slate-800/60 border-b border-slate-700 flex flex-col gap-1";

/// Appends caller classes to a base class list, skipping blanks.
pub(crate) fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Bordered panel holding a [`CardHeader`] and a [`CardBody`].
#[component]
pub fn Card(
    /// Extra classes for the outer panel
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <section class=with_extra(PANEL, &class)>{children()}</section> }
}

/// Titled strip at the top of a card.
#[component]
pub fn CardHeader(
    /// Heading text
    #[prop(into)]
    title: String,
    /// Muted line under the heading
    #[prop(into, optional)]
    subtitle: Option<String>,
    /// Extra classes for the heading
    #[prop(into, optional)]
    title_class: String,
) -> impl IntoView {
    let title_class = if title_class.trim().is_empty() {
        "text-lg font-semibold text-slate-100".to_string()
    } else {
        title_class
    };

    view! {
        <header class=HEADER>
            <h2 class=title_class>{title}</h2>
            {subtitle.map(|text| view! { <p class="text-sm text-slate-400">{text}</p> })}
        </header>
    }
}

#[component]
pub fn CardBody(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=with_extra("p-4", &class)>{children()}</div> }
}
