#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod drm;
pub mod error;
mod health;
pub mod metrics;
mod procfs;
pub mod source;
pub mod system;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{MetricsError, MetricsResult, ProbeError, ProbeResult};
pub use health::HttpEndpointChecker;
pub use metrics::DefaultMetricsSampler;
pub use source::{CommandOutput, HostSource, LocalSource};
pub use system::DefaultHardwareProbe;
