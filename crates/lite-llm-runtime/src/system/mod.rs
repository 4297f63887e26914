//! Hardware probe implementation.
//!
//! [`DefaultHardwareProbe`] implements `HardwareProbePort` from
//! lite-llm-core by running the host's own tools (`docker`, `lspci`,
//! `nvidia-smi`, `lsmod`, `uname`) and reading `/proc` and `/sys`.

mod commands;
pub mod gpu;
pub mod pci;

use std::path::Path;
use std::sync::Arc;

use lite_llm_core::{GpuVendor, HardwareProbePort, HardwareProfile};
use tracing::{debug, warn};

use crate::error::{ProbeError, ProbeResult};
use crate::procfs::{self, MEMINFO_PATH};
use crate::source::{HostSource, LocalSource};
use commands::{output_of, succeeds};
use pci::PciGpu;

/// Image used for the container GPU passthrough test.
pub const CUDA_TEST_IMAGE: &str = "nvidia/cuda:11.0-base";

/// Default implementation of `HardwareProbePort`.
///
/// Constructed in the CLI's composition root and handed to whatever needs
/// a hardware profile.
pub struct DefaultHardwareProbe {
    source: Arc<dyn HostSource>,
}

impl DefaultHardwareProbe {
    /// Probe the local machine.
    pub fn new() -> Self {
        Self::with_source(Arc::new(LocalSource::new()))
    }

    pub fn with_source(source: Arc<dyn HostSource>) -> Self {
        Self { source }
    }

    fn has_container_runtime(&self) -> bool {
        succeeds(self.source.as_ref(), "docker", &["--version"])
    }

    fn detect_gpu(&self) -> ProbeResult<Option<PciGpu>> {
        let lspci = output_of(self.source.as_ref(), "lspci", &["-v"])?;
        Ok(pci::find_gpu(&lspci))
    }

    fn system_memory_mb(&self) -> ProbeResult<u64> {
        let path = Path::new(MEMINFO_PATH);
        let meminfo = self
            .source
            .read_to_string(path)
            .map_err(|source| ProbeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        procfs::meminfo_mb(&meminfo, "MemTotal").ok_or_else(|| ProbeError::Parse {
            what: "MemTotal line",
            value: meminfo.lines().next().unwrap_or_default().to_string(),
        })
    }

    fn kernel_version(&self) -> ProbeResult<String> {
        output_of(self.source.as_ref(), "uname", &["-r"]).map(|s| s.trim().to_string())
    }
}

impl Default for DefaultHardwareProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProbePort for DefaultHardwareProbe {
    fn probe(&self) -> HardwareProfile {
        let source = self.source.as_ref();
        let mut profile = HardwareProfile::undetected();

        profile.has_container_runtime = self.has_container_runtime();

        match self.detect_gpu() {
            Ok(Some(gpu)) => {
                profile.gpu_memory_mb = gpu
                    .memory_mb
                    .unwrap_or_else(|| gpu::fallback_memory_mb(source, gpu.vendor));
                profile.gpu_vendor = gpu.vendor;
                profile.gpu_model = gpu.model;
            }
            Ok(None) => debug!("No supported GPU in lspci output"),
            Err(e) => warn!(error = %e, "GPU detection failed"),
        }

        profile.has_vendor_accel_stack = gpu::has_accel_stack(source, profile.gpu_vendor);

        profile.system_memory_mb = self.system_memory_mb().unwrap_or_else(|e| {
            warn!(error = %e, "System memory unavailable");
            0
        });

        profile.kernel_version = self.kernel_version().unwrap_or_else(|e| {
            debug!(error = %e, "Kernel version unavailable");
            "unknown".to_string()
        });

        debug!(
            vendor = %profile.gpu_vendor,
            gpu_memory_mb = profile.gpu_memory_mb,
            system_memory_mb = profile.system_memory_mb,
            "Hardware probe complete"
        );
        profile
    }

    fn check_gpu_passthrough(&self, vendor: GpuVendor) -> Option<bool> {
        if vendor != GpuVendor::Nvidia {
            return None;
        }
        Some(succeeds(
            self.source.as_ref(),
            "docker",
            &["run", "--rm", "--gpus", "all", CUDA_TEST_IMAGE, "nvidia-smi"],
        ))
    }
}
