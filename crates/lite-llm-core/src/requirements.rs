//! Host requirement validation.
//!
//! [`evaluate_requirements`] is pure: it looks only at a finished
//! [`HardwareProfile`] plus the container GPU passthrough result, which the
//! caller gathers separately because it needs to run a container.
//!
//! Deficiencies come in two grades. Warnings are logged and never fail the
//! check; violations are collected into a single [`RequirementsError`].

use std::fmt;

use tracing::warn;

use crate::domain::{GpuVendor, HardwareProfile};
use crate::settings::{MIN_GPU_MEMORY_MB, MIN_SYSTEM_MEMORY_MB};

/// A deficiency worth reporting that does not block deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementWarning {
    LowGpuMemory { available_mb: u64 },
    LowSystemMemory { available_mb: u64 },
    /// AMD GPU without ROCm.
    AccelStackMissing { vendor: GpuVendor },
    /// NVIDIA GPU but the CUDA test container could not see it.
    GpuPassthroughUnavailable,
}

impl RequirementWarning {
    /// Where to get the missing piece, when there is one.
    pub const fn install_hint(&self) -> Option<&'static str> {
        match self {
            Self::AccelStackMissing { .. } => Some(
                "https://rocm.docs.amd.com/projects/install-on-linux/en/latest/",
            ),
            Self::GpuPassthroughUnavailable => Some(
                "https://docs.nvidia.com/datacenter/cloud-native/container-toolkit/install-guide.html",
            ),
            Self::LowGpuMemory { .. } | Self::LowSystemMemory { .. } => None,
        }
    }
}

impl fmt::Display for RequirementWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowGpuMemory { available_mb } => write!(
                f,
                "GPU memory ({available_mb}MB) is below the recommended {MIN_GPU_MEMORY_MB}MB; larger models will not fit"
            ),
            Self::LowSystemMemory { available_mb } => write!(
                f,
                "System memory ({available_mb}MB) is below the recommended {MIN_SYSTEM_MEMORY_MB}MB"
            ),
            Self::AccelStackMissing { vendor } => write!(
                f,
                "{} not detected - {} GPU acceleration may not work properly",
                vendor.accel_stack_name(),
                vendor.as_str().to_uppercase()
            ),
            Self::GpuPassthroughUnavailable => f.write_str(
                "NVIDIA Container Toolkit not detected - GPU acceleration may not work properly",
            ),
        }
    }
}

/// A requirement the host does not meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementViolation {
    ContainerRuntimeMissing,
    NoSupportedGpu,
    GpuMemoryBelowMinimum { available_mb: u64 },
    SystemMemoryBelowMinimum { available_mb: u64 },
}

impl fmt::Display for RequirementViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerRuntimeMissing => {
                f.write_str("Docker is not installed or not accessible")
            }
            Self::NoSupportedGpu => f.write_str("No supported GPU detected (NVIDIA or AMD)"),
            Self::GpuMemoryBelowMinimum { available_mb } => write!(
                f,
                "GPU memory ({available_mb}MB) is below recommended minimum ({}GB)",
                MIN_GPU_MEMORY_MB / 1024
            ),
            Self::SystemMemoryBelowMinimum { available_mb } => write!(
                f,
                "System memory ({available_mb}MB) is below recommended minimum ({}GB)",
                MIN_SYSTEM_MEMORY_MB / 1024
            ),
        }
    }
}

/// Every violated requirement, reported together.
///
/// Displays as a header followed by one `  - <violation>` line each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsError {
    pub violations: Vec<RequirementViolation>,
}

impl fmt::Display for RequirementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("system requirements not met:")?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RequirementsError {}

/// Outcome of evaluating a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsReport {
    pub warnings: Vec<RequirementWarning>,
    pub violations: Vec<RequirementViolation>,
}

impl RequirementsReport {
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }

    /// Emit every warning through `tracing`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            match warning.install_hint() {
                Some(hint) => warn!(install_hint = hint, "{warning}"),
                None => warn!("{warning}"),
            }
        }
    }

    /// Split into the warnings and, if anything was violated, the
    /// aggregated error.
    pub fn into_result(self) -> Result<Vec<RequirementWarning>, RequirementsError> {
        if self.violations.is_empty() {
            Ok(self.warnings)
        } else {
            Err(RequirementsError {
                violations: self.violations,
            })
        }
    }
}

/// Evaluate a hardware profile against the minimum host requirements.
///
/// `gpu_passthrough` is the result of running the vendor's CUDA test image
/// under the container runtime; `None` when it was not attempted. It only
/// matters for NVIDIA hosts.
pub fn evaluate_requirements(
    profile: &HardwareProfile,
    gpu_passthrough: Option<bool>,
) -> RequirementsReport {
    let mut report = RequirementsReport::default();

    let gpu_low = profile.gpu_memory_mb < MIN_GPU_MEMORY_MB;
    let system_low = profile.system_memory_mb < MIN_SYSTEM_MEMORY_MB;

    if gpu_low {
        report.warnings.push(RequirementWarning::LowGpuMemory {
            available_mb: profile.gpu_memory_mb,
        });
    }
    if system_low {
        report.warnings.push(RequirementWarning::LowSystemMemory {
            available_mb: profile.system_memory_mb,
        });
    }
    if profile.gpu_vendor == GpuVendor::Amd && !profile.has_vendor_accel_stack {
        report.warnings.push(RequirementWarning::AccelStackMissing {
            vendor: GpuVendor::Amd,
        });
    }
    if profile.gpu_vendor == GpuVendor::Nvidia && gpu_passthrough == Some(false) {
        report
            .warnings
            .push(RequirementWarning::GpuPassthroughUnavailable);
    }

    if !profile.has_container_runtime {
        report
            .violations
            .push(RequirementViolation::ContainerRuntimeMissing);
    }
    if !profile.gpu_vendor.is_detected() {
        report.violations.push(RequirementViolation::NoSupportedGpu);
    }
    if gpu_low {
        report
            .violations
            .push(RequirementViolation::GpuMemoryBelowMinimum {
                available_mb: profile.gpu_memory_mb,
            });
    }
    if system_low {
        report
            .violations
            .push(RequirementViolation::SystemMemoryBelowMinimum {
                available_mb: profile.system_memory_mb,
            });
    }

    report
}
