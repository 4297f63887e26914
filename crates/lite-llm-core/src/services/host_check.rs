//! Probe-then-validate flow behind the `check` command.

use crate::domain::{GpuVendor, HardwareProfile};
use crate::ports::HardwareProbePort;
use crate::requirements::{RequirementsReport, evaluate_requirements};

/// A hardware profile together with its requirement evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCheck {
    pub profile: HardwareProfile,
    /// Container GPU passthrough result, when it was attempted.
    pub gpu_passthrough: Option<bool>,
    pub report: RequirementsReport,
}

/// Probe the host and evaluate it against the requirement floors.
///
/// The passthrough test starts a container, so it only runs for NVIDIA
/// hosts that have a container runtime.
pub fn check_host(probe: &dyn HardwareProbePort) -> HostCheck {
    let profile = probe.probe();

    let gpu_passthrough =
        if profile.gpu_vendor == GpuVendor::Nvidia && profile.has_container_runtime {
            probe.check_gpu_passthrough(profile.gpu_vendor)
        } else {
            None
        };

    let report = evaluate_requirements(&profile, gpu_passthrough);
    HostCheck {
        profile,
        gpu_passthrough,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::RequirementWarning;
    use mockall::mock;

    mock! {
        Probe {}
        impl HardwareProbePort for Probe {
            fn probe(&self) -> HardwareProfile;
            fn check_gpu_passthrough(&self, vendor: GpuVendor) -> Option<bool>;
        }
    }

    fn profile(vendor: GpuVendor) -> HardwareProfile {
        HardwareProfile {
            has_container_runtime: true,
            gpu_vendor: vendor,
            gpu_model: "test gpu".to_string(),
            gpu_memory_mb: 8192,
            has_vendor_accel_stack: true,
            system_memory_mb: 16_384,
            kernel_version: "6.8.0".to_string(),
        }
    }

    #[test]
    fn test_amd_host_skips_passthrough() {
        let mut probe = MockProbe::new();
        probe
            .expect_probe()
            .times(1)
            .returning(|| profile(GpuVendor::Amd));
        probe.expect_check_gpu_passthrough().never();

        let check = check_host(&probe);
        assert_eq!(check.gpu_passthrough, None);
        assert!(check.report.is_satisfied());
    }

    #[test]
    fn test_nvidia_passthrough_failure_becomes_warning() {
        let mut probe = MockProbe::new();
        probe
            .expect_probe()
            .returning(|| profile(GpuVendor::Nvidia));
        probe
            .expect_check_gpu_passthrough()
            .withf(|vendor| *vendor == GpuVendor::Nvidia)
            .times(1)
            .returning(|_| Some(false));

        let check = check_host(&probe);
        assert_eq!(check.gpu_passthrough, Some(false));
        assert_eq!(
            check.report.warnings,
            vec![RequirementWarning::GpuPassthroughUnavailable]
        );
    }

    #[test]
    fn test_no_container_runtime_skips_passthrough() {
        let mut probe = MockProbe::new();
        probe.expect_probe().returning(|| HardwareProfile {
            has_container_runtime: false,
            ..profile(GpuVendor::Nvidia)
        });
        probe.expect_check_gpu_passthrough().never();

        let check = check_host(&probe);
        assert!(!check.report.is_satisfied());
    }
}
