//! Metrics sampler port.

use crate::domain::UtilizationSample;

/// Port for sampling host utilization.
///
/// Each sub-metric degrades independently: an unreadable source yields
/// zero (or the GPU sentinel) and is logged, never surfaced as an error.
pub trait MetricsSamplerPort: Send + Sync {
    /// Take one independent sample.
    fn sample(&self) -> UtilizationSample;
}
