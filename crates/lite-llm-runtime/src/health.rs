//! HTTP reachability checks for the web UIs.

use std::time::Duration;

use async_trait::async_trait;
use lite_llm_core::{DEFAULT_ENDPOINT_TIMEOUT, EndpointCheckPort};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// `EndpointCheckPort` over a short-timeout reqwest client.
#[derive(Debug, Clone)]
pub struct HttpEndpointChecker {
    client: Client,
}

impl HttpEndpointChecker {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_ENDPOINT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        // Only fails when the TLS backend cannot initialise.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for HttpEndpointChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check HTTP health of an endpoint: one GET, reachable iff 200.
#[async_trait]
impl EndpointCheckPort for HttpEndpointChecker {
    async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!(url, error = %e, "Endpoint check failed");
                false
            }
        }
    }
}
