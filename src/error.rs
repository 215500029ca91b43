use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoistError {
    #[error("{0}")]
    InvalidUsage(String),

    #[error("Not authenticated. Run 'todoist auth <token>' or set TODOIST_API_TOKEN")]
    NotAuthenticated,

    #[error("Todoist reorder failed ({status} {status_text}){}", body_suffix(.body))]
    Transport {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Todoist reorder failed: {0}")]
    SyncRejected(String),

    #[error("Todoist API error (HTTP {status}){}", body_suffix(.body))]
    ApiError { status: u16, body: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl TodoistError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            TodoistError::InvalidUsage(_) => "INVALID_USAGE",
            TodoistError::NotAuthenticated => "NOT_AUTHENTICATED",
            TodoistError::Transport { .. } => "TRANSPORT_ERROR",
            TodoistError::SyncRejected(_) => "SYNC_REJECTED",
            TodoistError::ApiError { .. } => "API_ERROR",
            TodoistError::Request(_) => "REQUEST_FAILED",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Process exit code: 2 for usage errors, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            TodoistError::InvalidUsage(_) => 2,
            _ => 1,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_includes_body_when_present() {
        let err = TodoistError::Transport {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Todoist reorder failed (500 Internal Server Error): boom"
        );
    }

    #[test]
    fn test_transport_message_without_body() {
        let err = TodoistError::Transport {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Todoist reorder failed (502 Bad Gateway)");
    }

    #[test]
    fn test_error_codes_and_exit_codes() {
        let usage = TodoistError::InvalidUsage("bad".to_string());
        assert_eq!(usage.to_error_code(), "INVALID_USAGE");
        assert_eq!(usage.exit_code(), 2);

        let rejected = TodoistError::SyncRejected("nope".to_string());
        assert_eq!(rejected.to_error_code(), "SYNC_REJECTED");
        assert_eq!(rejected.exit_code(), 1);

        let response = rejected.to_error_response();
        assert_eq!(response.error, "Todoist reorder failed: nope");
        assert_eq!(response.code, "SYNC_REJECTED");
    }
}
