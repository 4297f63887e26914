//! Core services - orchestration over the ports.
//!
//! Services here don't know about concrete adapters; the CLI wires them
//! with runtime and Ollama implementations.

mod host_check;
mod status;

pub use host_check::{HostCheck, check_host};
pub use status::{EndpointStatus, ServerStatus, StatusReport, StatusService};
