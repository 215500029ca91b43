//! Atomic reorder over the Todoist sync protocol
//!
//! A full sibling ordering is sent as one `item_reorder` command. Success
//! is checked twice: the HTTP status, then the per-command entry in
//! `sync_status` keyed by the command's uuid.

use crate::error::{Result, TodoistError};
use crate::position::OrderedItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use uuid::Uuid;

const REORDER_COMMAND: &str = "item_reorder";
const SYNC_OK: &str = "ok";

/// Raw HTTP outcome of a sync request
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to the sync endpoint with a bearer credential
pub trait SyncTransport {
    fn post_json(
        &self,
        url: &str,
        token: &str,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl SyncTransport for HttpTransport {
    async fn post_json(&self, url: &str, token: &str, body: String) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[derive(Debug, Serialize)]
struct SyncRequest<'a> {
    commands: Vec<SyncCommand<'a>>,
}

#[derive(Debug, Serialize)]
struct SyncCommand<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    uuid: String,
    args: ReorderArgs<'a>,
}

#[derive(Debug, Serialize)]
struct ReorderArgs<'a> {
    items: &'a [OrderedItem],
}

#[derive(Debug, Deserialize)]
struct SyncResponse {
    #[serde(default)]
    sync_status: Option<HashMap<String, serde_json::Value>>,
}

/// Error detail for a per-command status, or `None` if it means success.
///
/// A missing, null, false, zero, empty or `"ok"` status is success; any
/// other string is the detail itself and anything else is its JSON text.
pub fn format_sync_status(status: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match status {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() || s == SYNC_OK => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Client for the sync endpoint
pub struct SyncClient<T> {
    transport: T,
    endpoint: String,
}

impl<T: SyncTransport> SyncClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Apply `items` as the complete ordering of their sibling group.
    ///
    /// Fewer than two items is a no-op and sends nothing.
    pub async fn reorder_items(&self, token: &str, items: &[OrderedItem]) -> Result<()> {
        if items.len() <= 1 {
            tracing::debug!(items = items.len(), "Skipping reorder of trivial sequence");
            return Ok(());
        }

        let uuid = Uuid::new_v4().to_string();
        let payload = SyncRequest {
            commands: vec![SyncCommand {
                kind: REORDER_COMMAND,
                uuid: uuid.clone(),
                args: ReorderArgs { items },
            }],
        };
        let body = serde_json::to_string(&payload)?;

        tracing::info!(
            command_uuid = %uuid,
            items = items.len(),
            "Submitting reorder command"
        );

        let response = self.transport.post_json(&self.endpoint, token, body).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Reorder request failed");
            return Err(TodoistError::Transport {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        // An unreadable body carries no negative signal
        let status = serde_json::from_str::<SyncResponse>(&response.body)
            .ok()
            .and_then(|parsed| parsed.sync_status)
            .and_then(|mut statuses| statuses.remove(&uuid));

        if let Some(detail) = status.as_ref().and_then(format_sync_status) {
            tracing::warn!(command_uuid = %uuid, detail = %detail, "Reorder command rejected");
            return Err(TodoistError::SyncRejected(detail));
        }

        Ok(())
    }
}
