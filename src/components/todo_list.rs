//! Todo List Component
//!
//! Left column: every fetched todo, or a loading row while a request runs.

use leptos::prelude::*;

use crate::components::TodoListItem;
use crate::models::completed_count;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let summary = move || {
        store.todos().with(|todos| {
            format!("{} todos, {} completed", todos.len(), completed_count(todos))
        })
    };

    view! {
        <div class="todo-list-column">
            <ul class="todo-list">
                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <li class="todo-row loading">"Loading..."</li> }
                >
                    <For
                        each=move || store.todos().get()
                        key=|todo| (todo.id, todo.title.clone(), todo.completed)
                        children=move |todo| view! { <TodoListItem todo=todo /> }
                    />
                </Show>
            </ul>
            <p class="todo-count">{summary}</p>
        </div>
    }
}
