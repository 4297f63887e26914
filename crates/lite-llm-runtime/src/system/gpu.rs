//! GPU memory fallbacks and accelerator stack detection.

use std::path::Path;

use lite_llm_core::GpuVendor;
use tracing::debug;

use super::commands::{output_of, succeeds};
use crate::drm::{self, VRAM_TOTAL_ATTR};
use crate::error::{ProbeError, ProbeResult};
use crate::source::HostSource;

/// Assumed GPU memory when neither `lspci` nor the vendor tools report it.
pub const DEFAULT_GPU_MEMORY_MB: u64 = 8192;

/// Where a vendor's accelerator stack shows itself on the host.
#[derive(Debug, Clone, Copy)]
pub struct AccelStack {
    pub vendor: GpuVendor,
    /// Binaries tried in order; the first one that exists decides.
    pub binaries: &'static [&'static str],
    /// Kernel module looked for in `lsmod` when no binary exists.
    pub kernel_module: &'static str,
}

pub const ACCEL_STACKS: &[AccelStack] = &[
    AccelStack {
        vendor: GpuVendor::Amd,
        binaries: &["/opt/rocm/bin/rocminfo", "/usr/bin/rocminfo"],
        kernel_module: "amdgpu",
    },
    AccelStack {
        vendor: GpuVendor::Nvidia,
        binaries: &["/usr/bin/nvidia-smi", "/usr/local/nvidia/bin/nvidia-smi"],
        kernel_module: "nvidia",
    },
];

/// GPU memory for a detected vendor when `lspci` did not report a size.
pub fn fallback_memory_mb(source: &dyn HostSource, vendor: GpuVendor) -> u64 {
    let result = match vendor {
        GpuVendor::Nvidia => nvidia_smi_memory_mb(source),
        GpuVendor::Amd => drm_vram_total_mb(source),
        GpuVendor::Unknown => return 0,
    };

    result.unwrap_or_else(|e| {
        debug!(
            vendor = %vendor,
            error = %e,
            default_mb = DEFAULT_GPU_MEMORY_MB,
            "GPU memory not reported, assuming default"
        );
        DEFAULT_GPU_MEMORY_MB
    })
}

/// First line of `nvidia-smi --query-gpu=memory.total`, in MiB.
fn nvidia_smi_memory_mb(source: &dyn HostSource) -> ProbeResult<u64> {
    let stdout = output_of(
        source,
        "nvidia-smi",
        &["--query-gpu=memory.total", "--format=csv,noheader,nounits"],
    )?;
    let first = stdout.lines().next().unwrap_or_default().trim();
    first.parse().map_err(|_| ProbeError::Parse {
        what: "nvidia-smi memory.total",
        value: first.to_string(),
    })
}

/// VRAM of the first card whose `mem_info_vram_total` parses.
fn drm_vram_total_mb(source: &dyn HostSource) -> ProbeResult<u64> {
    let cards = drm::card_names(source).map_err(|source| ProbeError::Read {
        path: drm::DRM_CLASS_DIR.into(),
        source,
    })?;

    cards
        .iter()
        .find_map(|card| {
            let path = drm::device_attribute(card, VRAM_TOTAL_ATTR);
            let raw = source.read_to_string(&path).ok()?;
            raw.trim().parse::<u64>().ok().map(drm::bytes_to_mb)
        })
        .ok_or_else(|| ProbeError::Parse {
            what: "DRM VRAM total",
            value: cards.join(","),
        })
}

/// Whether the vendor's accelerator stack is installed.
///
/// The first known binary that exists decides by whether it runs
/// successfully. With none installed, a loaded kernel module counts.
pub fn has_accel_stack(source: &dyn HostSource, vendor: GpuVendor) -> bool {
    let Some(stack) = ACCEL_STACKS.iter().find(|s| s.vendor == vendor) else {
        return false;
    };

    if let Some(binary) = stack
        .binaries
        .iter()
        .find(|path| source.exists(Path::new(path)))
    {
        return succeeds(source, binary, &[]);
    }

    match output_of(source, "lsmod", &[]) {
        Ok(modules) => modules.contains(stack.kernel_module),
        Err(e) => {
            debug!(error = %e, "lsmod unavailable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CommandOutput;
    use crate::testing::FakeSource;

    const LSMOD_AMD: &str = "Module                  Size  Used by\namdgpu              12468224  12\ndrm_ttm_helper         16384  1 amdgpu\n";

    #[test]
    fn test_nvidia_fallback_uses_first_smi_line() {
        let source = FakeSource::new().with_command(
            "nvidia-smi --query-gpu=memory.total --format=csv,noheader,nounits",
            CommandOutput::ok("8192\n24576\n"),
        );
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Nvidia), 8192);

        let source = FakeSource::new().with_command(
            "nvidia-smi --query-gpu=memory.total --format=csv,noheader,nounits",
            CommandOutput::ok("12288\n"),
        );
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Nvidia), 12288);
    }

    #[test]
    fn test_fallbacks_default_when_unreadable() {
        let source = FakeSource::new();
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Nvidia), DEFAULT_GPU_MEMORY_MB);
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Amd), DEFAULT_GPU_MEMORY_MB);
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Unknown), 0);
    }

    #[test]
    fn test_amd_fallback_reads_first_parsable_card() {
        let source = FakeSource::new()
            .with_dir("/sys/class/drm", &["card1", "card0-DP-1", "card0"])
            .with_file("/sys/class/drm/card0/device/mem_info_vram_total", "garbage\n")
            .with_file(
                "/sys/class/drm/card1/device/mem_info_vram_total",
                "8573157376\n",
            );
        assert_eq!(fallback_memory_mb(&source, GpuVendor::Amd), 8176);
    }

    #[test]
    fn test_first_existing_binary_decides() {
        // rocminfo exists but fails; amdgpu being loaded does not rescue it.
        let source = FakeSource::new()
            .with_executable("/usr/bin/rocminfo", false)
            .with_command("lsmod", CommandOutput::ok(LSMOD_AMD));
        assert!(!has_accel_stack(&source, GpuVendor::Amd));

        let source = FakeSource::new()
            .with_executable("/opt/rocm/bin/rocminfo", true)
            .with_executable("/usr/bin/rocminfo", false);
        assert!(has_accel_stack(&source, GpuVendor::Amd));
    }

    #[test]
    fn test_kernel_module_fallback() {
        let source = FakeSource::new().with_command("lsmod", CommandOutput::ok(LSMOD_AMD));
        assert!(has_accel_stack(&source, GpuVendor::Amd));
        assert!(!has_accel_stack(&source, GpuVendor::Nvidia));
        assert!(!has_accel_stack(&FakeSource::new(), GpuVendor::Amd));
        assert!(!has_accel_stack(&source, GpuVendor::Unknown));
    }

    #[test]
    fn test_nvidia_stack_binary() {
        let source = FakeSource::new().with_executable("/usr/local/nvidia/bin/nvidia-smi", true);
        assert!(has_accel_stack(&source, GpuVendor::Nvidia));
    }
}
