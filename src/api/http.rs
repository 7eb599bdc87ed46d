//! HTTP Todo Client
//!
//! reqwest-backed implementation of [`TodoApi`]. On wasm32 reqwest goes
//! through the browser's fetch.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, TodoApi};
use crate::config::ClientConfig;
use crate::models::{GenerateRequest, GenerateResponse, TaskId, TaskItem, UpdateCompletedRequest};

/// Characters escaped when an id is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn todo_url(&self, id: &TaskId) -> String {
        let segment = utf8_percent_encode(id.as_str(), PATH_SEGMENT);
        self.config.url(&format!("api/todos/{}", segment))
    }

    /// Send and reject any non-2xx status
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> ApiResult<Vec<TaskItem>> {
        let response = self.send(self.client.get(self.config.url("api/todos"))).await?;
        Self::decode(response).await
    }

    async fn generate_todos(&self, request: &GenerateRequest) -> ApiResult<Vec<TaskItem>> {
        let response = self
            .send(self.client.post(self.config.url("api/todos/generate")).json(request))
            .await?;
        let body: GenerateResponse = Self::decode(response).await?;
        Ok(body.items)
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<TaskItem> {
        let response = self
            .send(self.client.patch(self.todo_url(id)).json(&UpdateCompletedRequest { completed }))
            .await?;
        Self::decode(response).await
    }

    async fn delete_todo(&self, id: &TaskId) -> ApiResult<()> {
        self.send(self.client.delete(self.todo_url(id))).await?;
        Ok(())
    }
}
