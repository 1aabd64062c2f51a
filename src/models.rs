//! Frontend Models
//!
//! Data structures matching the remote to-do API.

use serde::{Deserialize, Serialize};

/// To-do record (matches API payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}

impl Todo {
    /// Copy of this record with `completed` set, sent as the PATCH body
    pub fn marked_completed(&self) -> Todo {
        Todo {
            completed: true,
            ..self.clone()
        }
    }
}

/// Number of completed records in `todos`
pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}
