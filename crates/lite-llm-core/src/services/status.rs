//! Status aggregation.
//!
//! [`StatusService::collect`] runs the hardware probe, the utilization
//! sample, the inference server queries and the web endpoint checks one
//! after another and merges the results into a [`StatusReport`]. Nothing
//! is cached: every call produces a fresh snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{HardwareProfile, ModelRecord, UtilizationSample};
use crate::ports::{EndpointCheckPort, HardwareProbePort, MetricsSamplerPort, ModelServerPort};
use crate::settings::StatusConfig;

/// Inference server section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub endpoint: String,
    pub healthy: bool,
    /// Why the health check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Installed models; empty when the server is down or listing was
    /// disabled.
    #[serde(default)]
    pub models: Vec<ModelRecord>,
    /// Why the model listing failed on an otherwise healthy server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_error: Option<String>,
}

/// Reachability of one web endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointStatus {
    pub name: String,
    pub url: String,
    pub reachable: bool,
}

/// Point-in-time status of the inference host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub generated_at: DateTime<Utc>,
    pub hardware: HardwareProfile,
    pub utilization: UtilizationSample,
    pub server: ServerStatus,
    pub web_endpoints: Vec<EndpointStatus>,
}

impl StatusReport {
    /// Whether the server and every web endpoint are up.
    pub fn all_services_up(&self) -> bool {
        self.server.healthy && self.web_endpoints.iter().all(|e| e.reachable)
    }
}

/// Builds [`StatusReport`]s from the injected ports.
pub struct StatusService {
    hardware: Arc<dyn HardwareProbePort>,
    metrics: Arc<dyn MetricsSamplerPort>,
    server: Arc<dyn ModelServerPort>,
    endpoints: Arc<dyn EndpointCheckPort>,
    config: StatusConfig,
}

impl StatusService {
    pub fn new(
        hardware: Arc<dyn HardwareProbePort>,
        metrics: Arc<dyn MetricsSamplerPort>,
        server: Arc<dyn ModelServerPort>,
        endpoints: Arc<dyn EndpointCheckPort>,
        config: StatusConfig,
    ) -> Self {
        Self {
            hardware,
            metrics,
            server,
            endpoints,
            config,
        }
    }

    /// Collect one report.
    pub async fn collect(&self) -> StatusReport {
        let generated_at = Utc::now();
        let hardware = self.hardware.probe();
        let utilization = self.metrics.sample();
        let server = self.server_status().await;

        let mut web_endpoints = Vec::with_capacity(self.config.web_endpoints.len());
        for endpoint in &self.config.web_endpoints {
            let reachable = self.endpoints.is_reachable(&endpoint.url).await;
            debug!(name = %endpoint.name, url = %endpoint.url, reachable, "Checked web endpoint");
            web_endpoints.push(EndpointStatus {
                name: endpoint.name.clone(),
                url: endpoint.url.clone(),
                reachable,
            });
        }

        StatusReport {
            generated_at,
            hardware,
            utilization,
            server,
            web_endpoints,
        }
    }

    async fn server_status(&self) -> ServerStatus {
        let mut status = ServerStatus {
            endpoint: self.server.endpoint().to_string(),
            healthy: false,
            error: None,
            models: Vec::new(),
            models_error: None,
        };

        if let Err(e) = self.server.health().await {
            warn!(endpoint = %status.endpoint, error = %e, "Inference server health check failed");
            status.error = Some(e.to_string());
            return status;
        }
        status.healthy = true;

        if self.config.include_models {
            match self.server.list_models().await {
                Ok(models) => status.models = models,
                Err(e) => {
                    warn!(error = %e, "Failed to list models");
                    status.models_error = Some(e.to_string());
                }
            }
        }

        status
    }
}
