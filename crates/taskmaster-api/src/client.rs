//! Task API Client
//!
//! `TaskApi` is the seam the view-model talks to; `HttpTaskApi` implements it
//! over HTTP with reqwest (fetch-backed in the browser).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::envelope::{self, Envelope};
use crate::error::{ApiError, ApiResult};
use crate::models::{ExportFormat, Task, TaskDraft, TaskFilter, TaskId, TaskPatch};

/// Characters left untouched by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Operations offered by the task REST API
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// List tasks, optionally restricted by completion
    async fn list_tasks(&self, filter: TaskFilter) -> ApiResult<Vec<Task>>;

    /// Free-text search over title and description
    async fn search_tasks(&self, query: &str) -> ApiResult<Vec<Task>>;

    async fn get_task(&self, id: TaskId) -> ApiResult<Task>;

    /// Create a task, returning the server's confirmation message
    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<String>;

    /// Update a task, returning the server's confirmation message
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<String>;

    /// Delete a task, returning the server's confirmation message
    async fn delete_task(&self, id: TaskId) -> ApiResult<String>;

    /// Address of the export download for `format`
    fn export_url(&self, format: ExportFormat) -> String;
}

/// HTTP implementation of [`TaskApi`]
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/tasks{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "task api request");
        self.client.request(method, url)
    }

    /// Send a request and decode its envelope, mapping every failure to [`ApiError`]
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = envelope::error_message(&body);
            tracing::warn!(status = status.as_u16(), ?message, "task api returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        envelope::decode(&body)
    }
}

/// Search query encoded the way browsers encode a URI component
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, URI_COMPONENT).to_string()
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self, filter: TaskFilter) -> ApiResult<Vec<Task>> {
        let path = match filter.completed_param() {
            Some(completed) => format!("?completed={}", completed),
            None => String::new(),
        };
        self.send(self.request(Method::GET, &path)).await?.into_data()
    }

    async fn search_tasks(&self, query: &str) -> ApiResult<Vec<Task>> {
        let path = format!("/search?q={}", encode_query(query));
        self.send(self.request(Method::GET, &path)).await?.into_data()
    }

    async fn get_task(&self, id: TaskId) -> ApiResult<Task> {
        self.send(self.request(Method::GET, &format!("/{}", id)))
            .await?
            .into_data()
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<String> {
        let request = self.request(Method::POST, "").json(draft);
        self.send::<IgnoredAny>(request).await?.into_message()
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<String> {
        let request = self.request(Method::PUT, &format!("/{}", id)).json(patch);
        self.send::<IgnoredAny>(request).await?.into_message()
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<String> {
        let request = self.request(Method::DELETE, &format!("/{}", id));
        self.send::<IgnoredAny>(request).await?.into_message()
    }

    fn export_url(&self, format: ExportFormat) -> String {
        self.url(&format!("/export/{}", format))
    }
}
