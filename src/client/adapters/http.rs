//! reqwest-backed adapter for the task API port.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::ports::{TaskApi, TaskApiError, TaskApiResult, TaskChanges, TaskDraft};
use crate::task::domain::{Task, TaskId};

/// Error body shape returned by the task service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP adapter for the task API.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskApi {
    /// Creates an adapter against the given base URL, e.g.
    /// `http://localhost:5000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/api/tasks/{id}", self.base_url)
    }
}

/// Decodes a successful payload or surfaces the service's error message.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> TaskApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| "API error".to_owned());
    Err(TaskApiError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> TaskApiResult<Vec<Task>> {
        let response = self.client.get(self.collection_url()).send().await?;
        decode(response).await
    }

    async fn create_task(&self, draft: TaskDraft) -> TaskApiResult<Task> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_task(&self, id: TaskId, changes: TaskChanges) -> TaskApiResult<Task> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&changes)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, id: TaskId) -> TaskApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        // The service answers deletes with a confirmation body; only the
        // status matters here.
        decode::<serde_json::Value>(response).await.map(|_| ())
    }
}
