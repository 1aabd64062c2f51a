//! Todo Details Component
//!
//! Right column: fields of the selected todo plus delete / complete actions.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoDetails() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = use_todo_store();

    let loading = move || store.loading().get();

    view! {
        <div class="todo-details-column">
            {move || match store.selected().get() {
                Some(todo) => {
                    let completed = todo.completed;
                    view! {
                        <div class="todo-details">
                            <h2>"Todo Details"</h2>
                            <p><strong>"Title: "</strong>{todo.title}</p>
                            <p><strong>"Completed: "</strong>{yes_no(completed)}</p>
                            <p><strong>"User ID: "</strong>{todo.user_id}</p>
                            <div class="todo-actions">
                                <button
                                    class="delete-btn"
                                    disabled=loading
                                    on:click=move |_| ctx.delete_selected()
                                >
                                    "Delete"
                                </button>
                                <button
                                    class=if completed { "complete-btn done" } else { "complete-btn" }
                                    disabled=move || loading() || completed
                                    on:click=move |_| ctx.complete_selected()
                                >
                                    {completion_label(completed)}
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <div class="todo-details-empty">"Select a todo to view details"</div>
                }.into_any(),
            }}
        </div>
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn completion_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Mark as Completed" }
}
