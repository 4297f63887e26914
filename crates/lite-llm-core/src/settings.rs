//! Default settings shared by every adapter.
//!
//! Persisted configuration files are out of scope; adapters build these
//! structs from command-line flags and environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the inference server.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Request timeout for the inference server. Model pulls and generation
/// routinely take minutes.
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for the web UI reachability checks.
pub const DEFAULT_ENDPOINT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default refresh interval for `status --watch`.
pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;

/// Minimum GPU memory for the supported model set.
pub const MIN_GPU_MEMORY_MB: u64 = 6144;

/// Minimum system memory.
pub const MIN_SYSTEM_MEMORY_MB: u64 = 8192;

/// Models pulled by `models recommended`, sized for 8 GB cards.
pub const RECOMMENDED_MODELS: &[&str] = &[
    "llama3.1:8b-instruct-q4_K_M",
    "mistral:7b-instruct-q4_K_M",
    "gemma2:2b-instruct-q4_K_M",
];

/// A web endpoint included in the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebEndpoint {
    /// Display name.
    pub name: String,
    pub url: String,
}

impl WebEndpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The web UIs deployed alongside the inference server.
pub fn default_web_endpoints() -> Vec<WebEndpoint> {
    vec![
        WebEndpoint::new("Open WebUI", "http://localhost:3000"),
        WebEndpoint::new("Custom Web", "http://localhost:8080"),
    ]
}

/// Configuration for the status aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Web endpoints checked for reachability.
    pub web_endpoints: Vec<WebEndpoint>,
    /// List installed models when the server is healthy.
    pub include_models: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            web_endpoints: default_web_endpoints(),
            include_models: true,
        }
    }
}

impl StatusConfig {
    /// Replace the checked web endpoints.
    #[must_use]
    pub fn with_web_endpoints(mut self, endpoints: Vec<WebEndpoint>) -> Self {
        self.web_endpoints = endpoints;
        self
    }

    /// Skip the model listing.
    #[must_use]
    pub const fn without_models(mut self) -> Self {
        self.include_models = false;
        self
    }
}

/// Watch-mode settings for the status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchConfig {
    /// Re-run the status cycle until interrupted.
    pub enabled: bool,
    /// Wall-clock delay between cycles.
    pub interval: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: Duration::from_secs(DEFAULT_WATCH_INTERVAL_SECS),
        }
    }
}

impl WatchConfig {
    /// Watch with the given interval. Zero is raised to one second.
    pub fn every(interval_secs: u64) -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(interval_secs.max(1)),
        }
    }
}
