//! Credential and endpoint configuration
//!
//! Environment variables take priority over the stored config file.

use crate::error::{Result, TodoistError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "TODOIST_API_TOKEN";
pub const CONFIG_DIR_ENV: &str = "TODOIST_CLI_CONFIG_DIR";
pub const API_URL_ENV: &str = "TODOIST_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.todoist.com/api/v1";

const APP_DIR: &str = "todoist-cli";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Location of the config file
pub fn config_path() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir).join(CONFIG_FILE));
        }
    }

    let base = dirs::config_dir().ok_or_else(|| {
        TodoistError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the user config directory",
        ))
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

fn read_stored() -> Result<StoredConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(StoredConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_stored(config: &StoredConfig) -> Result<PathBuf> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(config)?)?;
    Ok(path)
}

/// Resolve the API token: env var first, then the config file
pub fn load_token() -> Result<Option<String>> {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        let token = token.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }

    Ok(read_stored()?.token.filter(|t| !t.trim().is_empty()))
}

pub fn require_token() -> Result<String> {
    load_token()?.ok_or(TodoistError::NotAuthenticated)
}

/// Persist `token`, returning the file it was written to
pub fn save_token(token: &str) -> Result<PathBuf> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TodoistError::InvalidUsage("Token must not be empty".to_string()));
    }

    let mut config = read_stored()?;
    config.token = Some(token.to_string());
    let path = write_stored(&config)?;
    tracing::info!(path = %path.display(), "Saved API token");
    Ok(path)
}

/// Remove the stored token. Returns whether one was present.
pub fn clear_token() -> Result<bool> {
    let mut config = read_stored()?;
    let had_token = config.token.take().is_some();
    if had_token {
        write_stored(&config)?;
    }
    Ok(had_token)
}

/// REST base URL; the sync endpoint lives at `<base>/sync`
pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn sync_endpoint() -> String {
    format!("{}/sync", api_base_url())
}
