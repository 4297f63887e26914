//! Check command handler.
//!
//! Probes the host, logs every warning, and fails with the aggregated
//! violations. On success the hardware profile is printed.

use anyhow::Result;
use lite_llm_core::{HardwareProbePort, HostCheck, check_host};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::HardwareText;

/// Probe and validate, returning the check when every requirement holds.
pub fn run(probe: &dyn HardwareProbePort) -> Result<HostCheck, CliError> {
    info!("Checking system requirements");
    let check = check_host(probe);
    check.report.log_warnings();

    if let Err(e) = check.report.clone().into_result() {
        return Err(e.into());
    }
    Ok(check)
}

/// Execute the check command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let check = run(ctx.probe.as_ref())?;

    println!("✓ System requirements met\n");
    println!("=== System Information ===");
    println!("{}", HardwareText(&check.profile));
    if let Some(passthrough) = check.gpu_passthrough {
        let marker = if passthrough { "✓ Working" } else { "✗ Failed" };
        println!("Container GPU access: {marker}");
    }
    Ok(())
}
