//! REST API Bindings
//!
//! Browser fetch wrappers for the remote to-do service, organized by resource.

mod todos;

use reqwasm::http::{Request, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(#[from] reqwasm::Error),
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(#[source] reqwasm::Error),
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Client for one API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub(crate) fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Send `request` and turn non-2xx responses into `ApiError::Status`
async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await?;

    if is_success(response.status()) {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(status_error(status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(status: u16, body: String) -> ApiError {
    let body = if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body
    };
    ApiError::Status { status, body }
}
