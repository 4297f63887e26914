//! Utilization sample produced by the metrics sampler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel stored in [`UtilizationSample::gpu_percent`] when the GPU
/// busy figure could not be read.
pub const GPU_UNAVAILABLE: f64 = -1.0;

/// One independent utilization snapshot.
///
/// `cpu_percent` is the cumulative since-boot busy ratio from a single
/// `/proc/stat` read, so two samples taken a second apart on a long-running
/// host will be nearly identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationSample {
    pub cpu_percent: f64,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
    pub memory_percent: f64,
    /// GPU busy percent, or [`GPU_UNAVAILABLE`].
    pub gpu_percent: f64,
    pub gpu_memory_used_mb: u64,
    pub gpu_memory_total_mb: u64,
    pub timestamp: DateTime<Utc>,
}

impl UtilizationSample {
    /// Sample with every metric at its neutral value and the GPU marked
    /// unavailable.
    pub fn empty_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            cpu_percent: 0.0,
            memory_used_mb: 0,
            memory_total_mb: 0,
            memory_percent: 0.0,
            gpu_percent: GPU_UNAVAILABLE,
            gpu_memory_used_mb: 0,
            gpu_memory_total_mb: 0,
            timestamp,
        }
    }

    /// GPU busy percent when available.
    pub fn gpu_percent(&self) -> Option<f64> {
        (self.gpu_percent >= 0.0).then_some(self.gpu_percent)
    }

    /// Whether GPU memory figures were readable.
    pub const fn has_gpu_memory(&self) -> bool {
        self.gpu_memory_total_mb > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_marks_gpu_unavailable() {
        let sample = UtilizationSample::empty_at(Utc::now());
        assert_eq!(sample.gpu_percent, GPU_UNAVAILABLE);
        assert_eq!(sample.gpu_percent(), None);
        assert!(!sample.has_gpu_memory());
    }

    #[test]
    fn test_gpu_percent_available() {
        let sample = UtilizationSample {
            gpu_percent: 42.0,
            gpu_memory_total_mb: 8192,
            ..UtilizationSample::empty_at(Utc::now())
        };
        assert_eq!(sample.gpu_percent(), Some(42.0));
        assert!(sample.has_gpu_memory());
    }
}
