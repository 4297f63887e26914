//! Hardware snapshot types produced by the hardware prober.

use serde::{Deserialize, Serialize};
use std::fmt;

/// GPU vendor reported by the prober.
///
/// `Unknown` is a valid detection outcome, not an error: it means no
/// recognised VGA controller was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuVendor {
    Amd,
    Nvidia,
    #[default]
    Unknown,
}

impl GpuVendor {
    /// Lowercase label used in reports (`"amd"`, `"nvidia"`, `"unknown"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amd => "amd",
            Self::Nvidia => "nvidia",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a supported vendor was detected.
    pub const fn is_detected(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Name of the vendor's accelerator stack, for display.
    pub const fn accel_stack_name(self) -> &'static str {
        match self {
            Self::Amd => "ROCm",
            Self::Nvidia => "CUDA",
            Self::Unknown => "accelerator stack",
        }
    }
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time hardware facts for the inference host.
///
/// Built fresh by every probe call and never mutated afterwards. All
/// memory figures are in MB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Container runtime (`docker`) answered its version command.
    pub has_container_runtime: bool,
    /// Vendor of the first recognised GPU.
    pub gpu_vendor: GpuVendor,
    /// Model string from the PCI listing (empty when no GPU was found).
    pub gpu_model: String,
    /// Reported or fallback VRAM size.
    pub gpu_memory_mb: u64,
    /// ROCm / CUDA driver stack present for the detected vendor.
    pub has_vendor_accel_stack: bool,
    /// Total system RAM.
    pub system_memory_mb: u64,
    /// Output of `uname -r`, or `"unknown"`.
    pub kernel_version: String,
}

impl HardwareProfile {
    /// Profile describing a host where nothing could be detected.
    pub fn undetected() -> Self {
        Self {
            has_container_runtime: false,
            gpu_vendor: GpuVendor::Unknown,
            gpu_model: String::new(),
            gpu_memory_mb: 0,
            has_vendor_accel_stack: false,
            system_memory_mb: 0,
            kernel_version: "unknown".to_string(),
        }
    }
}
