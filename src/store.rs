//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos as last fetched from the API
    pub todos: Vec<Todo>,
    /// Todo shown in the details column
    pub selected: Option<Todo>,
    /// True while a request started by the user is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &TodoStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

pub fn store_set_loading(store: &TodoStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_select(store: &TodoStore, todo: Option<Todo>) {
    store.selected().set(todo);
}

/// Current selection without subscribing the caller
pub fn store_selected(store: &TodoStore) -> Option<Todo> {
    store.selected().get_untracked()
}

pub fn store_selected_id(store: &TodoStore) -> Option<u32> {
    store.selected().with(|selected| selected.as_ref().map(|todo| todo.id))
}
