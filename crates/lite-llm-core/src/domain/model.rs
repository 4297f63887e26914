//! Types observed from the inference server's model registry.
//!
//! Field names on the wire follow the server's JSON API; the Rust names
//! carry units where the wire names don't.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status label the server sends as the last event of a successful pull.
pub const PULL_SUCCESS_STATUS: &str = "success";

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Free-form generation options forwarded verbatim (`temperature`,
/// `num_ctx`, ...).
pub type GenerateOptions = serde_json::Map<String, serde_json::Value>;

/// A model installed on the inference server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Server-qualified name, e.g. `llama3.1:8b`.
    pub name: String,
    #[serde(rename = "size", default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub modified_at: DateTime<Utc>,
}

impl ModelRecord {
    /// Size in GiB, for display.
    pub fn size_gb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_GB
    }
}

/// One decoded event from a streamed model pull.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullProgressEvent {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(rename = "total", default, skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<u64>,
    #[serde(rename = "completed", default, skip_serializing_if = "Option::is_none")]
    pub completed_bytes: Option<u64>,
    /// Error reported by the server in place of a status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PullProgressEvent {
    /// Event with only a status label.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// Whether this is the terminal success event.
    pub fn is_success(&self) -> bool {
        self.status == PULL_SUCCESS_STATUS
    }

    /// Completion percentage for layer download events.
    pub fn percent(&self) -> Option<f64> {
        match (self.completed_bytes, self.total_bytes) {
            (Some(done), Some(total)) if total > 0 => Some(done as f64 / total as f64 * 100.0),
            (None, Some(total)) if total > 0 => Some(0.0),
            _ => None,
        }
    }
}

/// Result of a non-streaming generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResult {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}
