//! To-do Resource
//!
//! List, get, delete and patch on `/todos`.

use reqwasm::http::Request;

use crate::models::Todo;
use super::{send, ApiError, TodoApi};

impl TodoApi {
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = send(Request::get(&self.todos_url())).await?;
        response
            .json::<Vec<Todo>>()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn get_todo(&self, id: u32) -> Result<Todo, ApiError> {
        let response = send(Request::get(&self.todo_url(id))).await?;
        response
            .json::<Todo>()
            .await
            .map_err(ApiError::Decode)
    }

    pub async fn delete_todo(&self, id: u32) -> Result<(), ApiError> {
        send(Request::delete(&self.todo_url(id))).await?;
        Ok(())
    }

    /// PATCH the full record. The response body is not read.
    pub async fn update_todo(&self, todo: &Todo) -> Result<(), ApiError> {
        let body = patch_body(todo)?;
        let request = Request::patch(&self.todo_url(todo.id))
            .header("Content-Type", "application/json")
            .body(body);
        send(request).await?;
        Ok(())
    }
}

fn patch_body(todo: &Todo) -> Result<String, ApiError> {
    Ok(serde_json::to_string(todo)?)
}
