//! Hardware probe port.
//!
//! This port abstracts active hardware probing (command execution,
//! pseudo-filesystem reads) from the core domain. The implementation lives
//! in `lite-llm-runtime`.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (active probing via `Command::new`)
//! - The CLI injects the probe from its composition root

use crate::domain::{GpuVendor, HardwareProfile};

/// Port for probing the inference host's hardware.
///
/// Implementations never fail: every sub-check degrades to a neutral value
/// (false, zero, `"unknown"`) and logs the cause.
pub trait HardwareProbePort: Send + Sync {
    /// Build a fresh hardware profile.
    fn probe(&self) -> HardwareProfile;

    /// Run the vendor's container GPU passthrough test.
    ///
    /// Returns `None` when the vendor has no such test, otherwise whether
    /// the test container could use the GPU.
    fn check_gpu_passthrough(&self, vendor: GpuVendor) -> Option<bool>;
}
