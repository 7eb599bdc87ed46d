//! Todo Service Client
//!
//! Frontend bindings to the remote todo service, organized as a trait so the
//! planner can run against the HTTP client or an in-memory fake.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{GenerateRequest, TaskId, TaskItem};

pub use http::HttpTodoApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Ways a call to the todo service can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the service or no response came back
    #[error("transport error: {0}")]
    Transport(String),
    /// The service answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },
    /// A success response whose body could not be parsed
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Remote todo service operations.
///
/// Futures are not `Send`: in the browser everything runs on the UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /api/todos`
    async fn list_todos(&self) -> ApiResult<Vec<TaskItem>>;

    /// `POST /api/todos/generate`
    async fn generate_todos(&self, request: &GenerateRequest) -> ApiResult<Vec<TaskItem>>;

    /// `PATCH /api/todos/{id}`
    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<TaskItem>;

    /// `DELETE /api/todos/{id}`
    async fn delete_todo(&self, id: &TaskId) -> ApiResult<()>;
}
