#[cfg(test)]
pub mod test_helpers {
    use crate::api::{NewTask, Task, TaskSource};
    use crate::error::{Result, TodoistError};
    use crate::scope::{OrderableTask, ScopeKey};
    use crate::sync::{SyncTransport, TransportResponse};
    use std::sync::Mutex;

    type Responder = Box<dyn Fn(&serde_json::Value) -> Result<TransportResponse> + Send + Sync>;

    /// Records every sync request and answers with a response built from it
    pub struct FakeTransport {
        pub requests: Mutex<Vec<(String, String, serde_json::Value)>>,
        respond: Responder,
    }

    impl FakeTransport {
        pub fn new(
            respond: impl Fn(&serde_json::Value) -> Result<TransportResponse> + Send + Sync + 'static,
        ) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                respond: Box::new(respond),
            }
        }

        /// Acknowledges every command with the given status value
        pub fn acknowledging(status: serde_json::Value) -> Self {
            Self::new(move |body| {
                let uuid = body["commands"][0]["uuid"]
                    .as_str()
                    .unwrap_or("missing")
                    .to_string();
                let mut statuses = serde_json::Map::new();
                statuses.insert(uuid, status.clone());
                Ok(ok_response(
                    serde_json::json!({ "sync_status": statuses }).to_string(),
                ))
            })
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_body(&self) -> serde_json::Value {
            self.requests.lock().unwrap().last().unwrap().2.clone()
        }
    }

    impl SyncTransport for FakeTransport {
        async fn post_json(&self, url: &str, token: &str, body: String) -> Result<TransportResponse> {
            let parsed: serde_json::Value = serde_json::from_str(&body)?;
            let response = (self.respond)(&parsed);
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), token.to_string(), parsed));
            response
        }
    }

    pub fn ok_response(body: String) -> TransportResponse {
        TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            body,
        }
    }

    /// In-memory task source that records the scopes it was asked for
    pub struct FakeTaskSource {
        pub tasks: Vec<OrderableTask>,
        pub fetched_scopes: Mutex<Vec<ScopeKey>>,
    }

    impl FakeTaskSource {
        pub fn new(tasks: Vec<OrderableTask>) -> Self {
            Self {
                tasks,
                fetched_scopes: Mutex::new(Vec::new()),
            }
        }

        pub fn fetched_scopes(&self) -> Vec<ScopeKey> {
            self.fetched_scopes.lock().unwrap().clone()
        }
    }

    impl TaskSource for FakeTaskSource {
        async fn get_tasks(&self, scope: &ScopeKey) -> Result<Vec<OrderableTask>> {
            self.fetched_scopes.lock().unwrap().push(scope.clone());
            Ok(self.tasks.clone())
        }

        async fn get_task(&self, id: &str) -> Result<Task> {
            self.tasks
                .iter()
                .find(|task| task.id == id)
                .map(|handle| Task {
                    handle: handle.clone(),
                    content: format!("Task {}", id),
                    description: String::new(),
                    priority: None,
                })
                .ok_or_else(|| TodoistError::ApiError {
                    status: 404,
                    body: "Task not found".to_string(),
                })
        }

        async fn add_task(&self, task: &NewTask) -> Result<Task> {
            Ok(Task {
                handle: OrderableTask {
                    id: "new".to_string(),
                    project_id: task
                        .project_id
                        .clone()
                        .unwrap_or_else(|| "inbox".to_string()),
                    section_id: task.section_id.clone(),
                    parent_id: task.parent_id.clone(),
                    child_order: i64::MAX,
                },
                content: task.content.clone(),
                description: task.description.clone().unwrap_or_default(),
                priority: task.priority,
            })
        }
    }
}
