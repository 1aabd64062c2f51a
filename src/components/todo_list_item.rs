//! Todo List Item Component
//!
//! A single row in the todo list.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::Todo;
use crate::store::{store_selected_id, use_todo_store};

/// Clickable row; highlighted while its todo is selected
#[component]
pub fn TodoListItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let is_selected = move || store_selected_id(&store) == Some(id);

    view! {
        <li
            class=move || row_class(is_selected(), completed)
            on:click=move |_| ctx.open(id)
        >
            {todo.title}
        </li>
    }
}

fn row_class(selected: bool, completed: bool) -> String {
    let mut c = String::from("todo-row");
    if selected { c.push_str(" selected"); }
    if completed { c.push_str(" completed"); }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(false, false), "todo-row");
        assert_eq!(row_class(true, false), "todo-row selected");
        assert_eq!(row_class(true, true), "todo-row selected completed");
    }
}
