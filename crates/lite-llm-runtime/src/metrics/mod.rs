//! Utilization sampler implementation.
//!
//! [`DefaultMetricsSampler`] implements `MetricsSamplerPort` from
//! lite-llm-core. Each sub-metric is read independently; a failure is
//! logged and leaves that metric at its neutral value.

pub mod cpu;
pub mod gpu;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use lite_llm_core::{MetricsSamplerPort, UtilizationSample};
use tracing::{debug, warn};

use crate::error::{MetricsError, MetricsResult};
use crate::procfs::{MEMINFO_PATH, STAT_PATH};
use crate::source::{HostSource, LocalSource};

/// Default implementation of `MetricsSamplerPort`.
pub struct DefaultMetricsSampler {
    source: Arc<dyn HostSource>,
}

impl DefaultMetricsSampler {
    /// Sample the local machine.
    pub fn new() -> Self {
        Self::with_source(Arc::new(LocalSource::new()))
    }

    pub fn with_source(source: Arc<dyn HostSource>) -> Self {
        Self { source }
    }

    fn read(&self, path: &str) -> MetricsResult<String> {
        let path = Path::new(path);
        self.source
            .read_to_string(path)
            .map_err(|source| MetricsError::Read {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl Default for DefaultMetricsSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSamplerPort for DefaultMetricsSampler {
    fn sample(&self) -> UtilizationSample {
        let mut sample = UtilizationSample::empty_at(Utc::now());

        match self.read(STAT_PATH).and_then(|stat| cpu::busy_percent(&stat)) {
            Ok(percent) => sample.cpu_percent = percent,
            Err(e) => warn!(error = %e, "Failed to get CPU usage"),
        }

        match self.read(MEMINFO_PATH) {
            Ok(meminfo) => {
                let usage = memory::memory_usage(&meminfo);
                sample.memory_used_mb = usage.used_mb;
                sample.memory_total_mb = usage.total_mb;
                sample.memory_percent = usage.percent;
            }
            Err(e) => warn!(error = %e, "Failed to get memory usage"),
        }

        match gpu::gpu_usage(self.source.as_ref()) {
            Ok(usage) => {
                sample.gpu_percent = usage.percent;
                sample.gpu_memory_used_mb = usage.memory_used_mb;
                sample.gpu_memory_total_mb = usage.memory_total_mb;
            }
            // Hosts without an amdgpu card are the common case.
            Err(e) => debug!(error = %e, "GPU usage unavailable"),
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSource;
    use lite_llm_core::GPU_UNAVAILABLE;

    #[test]
    fn test_sample_with_every_source() {
        let source = FakeSource::new()
            .with_file("/proc/stat", "cpu  75 0 0 25 0 0 0 0\n")
            .with_file(
                "/proc/meminfo",
                "MemTotal: 8388608 kB\nMemFree: 2097152 kB\nBuffers: 0 kB\nCached: 2097152 kB\n",
            )
            .with_dir("/sys/class/drm", &["card0"])
            .with_file("/sys/class/drm/card0/device/mem_info_vram_total", "4294967296")
            .with_file("/sys/class/drm/card0/device/mem_info_vram_used", "1073741824")
            .with_file("/sys/class/drm/card0/device/gpu_busy_percent", "5");

        let sample = DefaultMetricsSampler::with_source(Arc::new(source)).sample();

        assert!((sample.cpu_percent - 75.0).abs() < 1e-9);
        assert_eq!(sample.memory_total_mb, 8192);
        assert_eq!(sample.memory_used_mb, 4096);
        assert!((sample.memory_percent - 50.0).abs() < 1e-9);
        assert_eq!(sample.gpu_percent(), Some(5.0));
        assert_eq!(sample.gpu_memory_used_mb, 1024);
        assert_eq!(sample.gpu_memory_total_mb, 4096);
    }

    #[test]
    fn test_sub_metrics_degrade_independently() {
        let source = FakeSource::new()
            .with_file("/proc/stat", "intr 1 2 3\n")
            .with_file("/proc/meminfo", "MemTotal: 2048 kB\nMemFree: 1024 kB\n");

        let sample = DefaultMetricsSampler::with_source(Arc::new(source)).sample();

        assert_eq!(sample.cpu_percent, 0.0);
        assert_eq!(sample.memory_total_mb, 2);
        assert_eq!(sample.memory_used_mb, 1);
        assert_eq!(sample.gpu_percent, GPU_UNAVAILABLE);
        assert_eq!(sample.gpu_memory_total_mb, 0);
    }
}
