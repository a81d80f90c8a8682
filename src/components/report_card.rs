//! Report Card Component

use leptos::prelude::*;

/// Titled panel with an optional action slot (e.g. an export button)
#[component]
pub fn ReportCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<Signal<String>>,
    #[prop(optional, into)] extra_class: String,
    #[prop(optional, into)] actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("report-card {}", extra_class)>
            <div class="report-card-head">
                <div>
                    <h2>{title}</h2>
                    {subtitle.map(|s| view! { <div class="report-card-subtitle">{move || s.get()}</div> })}
                </div>
                {actions.map(|a| view! { <div class="report-card-actions">{a.run()}</div> })}
            </div>
            <div class="report-card-body">{children()}</div>
        </div>
    }
}
