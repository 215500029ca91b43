//! Todoist REST collaborator
//!
//! Only the calls the ordering workflow needs: fetch one scoped sibling
//! page, fetch a single task, create a task.

use crate::error::{Result, TodoistError};
use crate::scope::{OrderableTask, ScopeKey};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::future::Future;

/// Upper bound the REST API accepts for one page of tasks
pub const TASK_PAGE_LIMIT: u32 = 200;

/// A task as returned by the REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub handle: OrderableTask,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<u8>,
}

/// Payload for creating a task
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTask {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TaskPage {
    #[serde(default)]
    results: Vec<OrderableTask>,
}

/// Remote source of task handles
pub trait TaskSource {
    /// Current members of one sibling group, in whatever order the remote returns them
    fn get_tasks(&self, scope: &ScopeKey)
        -> impl Future<Output = Result<Vec<OrderableTask>>> + Send;

    fn get_task(&self, id: &str) -> impl Future<Output = Result<Task>> + Send;

    fn add_task(&self, task: &NewTask) -> impl Future<Output = Result<Task>> + Send;
}

/// reqwest-backed REST client
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TodoistError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl TaskSource for RestClient {
    async fn get_tasks(&self, scope: &ScopeKey) -> Result<Vec<OrderableTask>> {
        let (key, value) = scope.query_pair();
        tracing::debug!(scope_key = key, scope_id = value, "Fetching sibling tasks");

        let response = self
            .client
            .get(self.url("tasks"))
            .bearer_auth(&self.token)
            .query(&[(key, value.to_string()), ("limit", TASK_PAGE_LIMIT.to_string())])
            .send()
            .await?;

        let page: TaskPage = Self::read_json(response).await?;
        Ok(page.results)
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        let response = self
            .client
            .get(self.url(&format!("tasks/{}", id)))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn add_task(&self, task: &NewTask) -> Result<Task> {
        let response = self
            .client
            .post(self.url("tasks"))
            .bearer_auth(&self.token)
            .json(task)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
