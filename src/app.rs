//! Todos Frontend App
//!
//! Root component with header and two-column layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::components::{PageHeader, TodoDetails, TodoList};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(TodoState::default());
    let ctx = TodoContext::new(store, TodoApi::new(config.api_base));

    // Provide state and actions to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| ctx.refresh());

    view! {
        <div class="app-layout">
            <PageHeader title="Todos" />
            <div class="app-columns">
                <TodoList />
                <TodoDetails />
            </div>
        </div>
    }
}
