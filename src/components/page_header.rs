//! Page Header Component

use leptos::prelude::*;

#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{title}</h1>
        </header>
    }
}
