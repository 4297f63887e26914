//! Reachability checks for auxiliary HTTP endpoints (web UIs).

use async_trait::async_trait;

/// Port for checking whether an HTTP endpoint answers.
#[async_trait]
pub trait EndpointCheckPort: Send + Sync {
    /// `true` iff a GET on `url` returns HTTP 200 within the timeout.
    async fn is_reachable(&self, url: &str) -> bool;
}
