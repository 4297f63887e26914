//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define what the core expects from infrastructure. They contain no
//! implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - No process or filesystem details; probing is intent-based
//! - Probing ports are infallible and degrade to neutral values

pub mod endpoint_check;
pub mod hardware_probe;
pub mod metrics_sampler;
pub mod model_server;

pub use endpoint_check::EndpointCheckPort;
pub use hardware_probe::HardwareProbePort;
pub use metrics_sampler::MetricsSamplerPort;
pub use model_server::{ModelServerError, ModelServerPort, ModelServerResult, PullProgressSink};
