//! Application Context
//!
//! User actions shared with components via the Leptos Context API.
//! Each action runs on the browser event loop. Outcomes are applied to the
//! store by the `apply_*` functions, which always clear the loading flag;
//! follow-up fetches set it again before their first await.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, TodoApi};
use crate::models::Todo;
use crate::store::{
    store_select, store_selected, store_set_loading, store_set_todos, TodoStore,
};

#[derive(Clone, Copy)]
pub struct TodoContext {
    store: TodoStore,
    api: StoredValue<TodoApi>,
}

impl TodoContext {
    pub fn new(store: TodoStore, api: TodoApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    /// Reload the todo list
    pub fn refresh(&self) {
        let ctx = *self;
        spawn_local(async move { ctx.load_todos().await });
    }

    /// Fetch one todo and show it in the details column
    pub fn open(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move { ctx.load_details(id).await });
    }

    /// Delete the selected todo, then reload the list
    pub fn delete_selected(&self) {
        let Some(todo) = store_selected(&self.store) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            store_set_loading(&ctx.store, true);
            let result = ctx.api.get_value().delete_todo(todo.id).await;
            if apply_delete(&ctx.store, todo.id, result) {
                ctx.load_todos().await;
            }
        });
    }

    /// Mark the selected todo completed, then re-fetch its details
    pub fn complete_selected(&self) {
        let Some(todo) = store_selected(&self.store) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            store_set_loading(&ctx.store, true);
            let result = ctx.api.get_value().update_todo(&todo.marked_completed()).await;
            if let Some(id) = apply_complete(&ctx.store, todo.id, result) {
                ctx.load_details(id).await;
            }
        });
    }

    async fn load_todos(self) {
        store_set_loading(&self.store, true);
        let result = self.api.get_value().list_todos().await;
        apply_todos(&self.store, result);
    }

    async fn load_details(self, id: u32) {
        store_set_loading(&self.store, true);
        let result = self.api.get_value().get_todo(id).await;
        apply_details(&self.store, id, result);
    }
}

fn apply_todos(store: &TodoStore, result: Result<Vec<Todo>, ApiError>) {
    match result {
        Ok(todos) => {
            log::debug!("Loaded {} todos", todos.len());
            store_set_todos(store, todos);
        }
        Err(e) => log::error!("Error fetching todos: {}", e),
    }
    store_set_loading(store, false);
}

fn apply_details(store: &TodoStore, id: u32, result: Result<Todo, ApiError>) {
    match result {
        Ok(todo) => {
            log::debug!("Loaded details for todo {}", id);
            store_select(store, Some(todo));
        }
        Err(e) => log::error!("Error fetching todo details: {}", e),
    }
    store_set_loading(store, false);
}

/// Clears the selection on success. Returns whether the list needs a reload.
fn apply_delete(store: &TodoStore, id: u32, result: Result<(), ApiError>) -> bool {
    let deleted = match result {
        Ok(()) => {
            log::info!("Deleted todo {}", id);
            store_select(store, None);
            true
        }
        Err(e) => {
            log::error!("Error deleting todo: {}", e);
            false
        }
    };
    store_set_loading(store, false);
    deleted
}

/// Returns the id whose details must be re-fetched, if the update succeeded
fn apply_complete(store: &TodoStore, id: u32, result: Result<(), ApiError>) -> Option<u32> {
    let refetch = match result {
        Ok(()) => {
            log::info!("Marked todo {} completed", id);
            Some(id)
        }
        Err(e) => {
            log::error!("Error updating todo: {}", e);
            None
        }
    };
    store_set_loading(store, false);
    refetch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{TodoState, TodoStateStoreFields};
    use reactive_stores::Store;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
            user_id: 1,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status { status: 500, body: "boom".to_string() }
    }

    fn loading_store_with(selected: Option<Todo>) -> TodoStore {
        Store::new(TodoState {
            todos: vec![make_todo(1, false), make_todo(2, true)],
            selected,
            loading: true,
        })
    }

    fn make_context(store: TodoStore) -> TodoContext {
        TodoContext::new(store, TodoApi::new("http://localhost:3000"))
    }

    #[test]
    fn test_actions_without_selection_are_noops() {
        let store = Store::new(TodoState::default());
        let ctx = make_context(store);

        ctx.delete_selected();
        ctx.complete_selected();

        assert!(!store.loading().get_untracked());
        assert!(store.selected().get_untracked().is_none());
        assert!(store.todos().get_untracked().is_empty());
    }

    #[test]
    fn test_apply_todos_replaces_list() {
        let store = loading_store_with(None);

        apply_todos(&store, Ok(vec![make_todo(7, false)]));

        let todos = store.todos().get_untracked();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 7);
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_todos_error_keeps_list() {
        let store = loading_store_with(None);

        apply_todos(&store, Err(server_error()));

        assert_eq!(store.todos().get_untracked().len(), 2);
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_details_selects_todo() {
        let store = loading_store_with(None);

        apply_details(&store, 2, Ok(make_todo(2, true)));

        assert_eq!(store.selected().get_untracked(), Some(make_todo(2, true)));
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_details_error_keeps_selection() {
        let store = loading_store_with(Some(make_todo(1, false)));

        apply_details(&store, 2, Err(server_error()));

        assert_eq!(store.selected().get_untracked().map(|t| t.id), Some(1));
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_delete_clears_selection_and_requests_reload() {
        let store = loading_store_with(Some(make_todo(1, false)));

        assert!(apply_delete(&store, 1, Ok(())));
        assert!(store.selected().get_untracked().is_none());
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_delete_error_keeps_selection() {
        let store = loading_store_with(Some(make_todo(1, false)));

        assert!(!apply_delete(&store, 1, Err(server_error())));
        assert_eq!(store.selected().get_untracked().map(|t| t.id), Some(1));
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_complete_refetches_selected() {
        let store = loading_store_with(Some(make_todo(1, false)));

        assert_eq!(apply_complete(&store, 1, Ok(())), Some(1));
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_apply_complete_error_skips_refetch() {
        let store = loading_store_with(Some(make_todo(1, false)));

        assert_eq!(apply_complete(&store, 1, Err(server_error())), None);
        assert_eq!(store.selected().get_untracked(), Some(make_todo(1, false)));
        assert!(!store.loading().get_untracked());
    }
}
