//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired together for the
//! CLI. All concrete implementations are instantiated here:
//! - Hardware probe and metrics sampler (via lite-llm-runtime)
//! - Web endpoint checker (via lite-llm-runtime)
//! - Inference server client (via lite-llm-ollama)
//!
//! Command handlers only see the core ports.

use std::sync::Arc;

use lite_llm_core::{
    EndpointCheckPort, HardwareProbePort, MetricsSamplerPort, ModelServerPort, StatusConfig,
    StatusService,
};
use lite_llm_ollama::{CancellationToken, OllamaClient, OllamaClientConfig};
use lite_llm_runtime::{DefaultHardwareProbe, DefaultMetricsSampler, HttpEndpointChecker};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the inference server.
    pub ollama_url: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ollama_url: lite_llm_core::DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub probe: Arc<dyn HardwareProbePort>,
    pub metrics: Arc<dyn MetricsSamplerPort>,
    pub server: Arc<dyn ModelServerPort>,
    pub endpoints: Arc<dyn EndpointCheckPort>,
    /// Cancelled on Ctrl-C; aborts in-flight server requests and ends
    /// watch loops.
    pub cancel: CancellationToken,
}

impl CliContext {
    /// Status aggregator over this context's adapters.
    pub fn status_service(&self, config: StatusConfig) -> StatusService {
        StatusService::new(
            Arc::clone(&self.probe),
            Arc::clone(&self.metrics),
            Arc::clone(&self.server),
            Arc::clone(&self.endpoints),
            config,
        )
    }
}

/// Bootstrap the CLI: build every adapter and bind the server client to
/// `cancel`.
pub fn bootstrap(config: &CliConfig, cancel: CancellationToken) -> Result<CliContext, CliError> {
    let client_config = OllamaClientConfig::new().with_base_url(config.ollama_url.clone());
    let client = OllamaClient::new(&client_config)?.with_cancellation(cancel.clone());

    Ok(CliContext {
        probe: Arc::new(DefaultHardwareProbe::new()),
        metrics: Arc::new(DefaultMetricsSampler::new()),
        server: Arc::new(client),
        endpoints: Arc::new(HttpEndpointChecker::new()),
        cancel,
    })
}
