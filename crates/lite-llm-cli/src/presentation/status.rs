//! Text rendering of status reports and hardware profiles.

use std::fmt;

use lite_llm_core::{HardwareProfile, StatusReport, UtilizationSample};

use super::tables::format_size_gb;

/// Service state marker used throughout the status output.
pub const fn format_status(up: bool) -> &'static str {
    if up { "✓ Running" } else { "✗ Not Running" }
}

const fn format_presence(found: bool) -> &'static str {
    if found { "✓ Found" } else { "✗ Not Found" }
}

/// Hardware section shared by `status` and `check`.
pub struct HardwareText<'a>(pub &'a HardwareProfile);

impl fmt::Display for HardwareText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.0;
        writeln!(f, "Kernel: {}", profile.kernel_version)?;
        writeln!(f, "Docker: {}", format_presence(profile.has_container_runtime))?;
        if profile.gpu_vendor.is_detected() {
            writeln!(f, "GPU: ✓ {}", profile.gpu_vendor.as_str().to_uppercase())?;
            writeln!(f, "  Model: {}", profile.gpu_model)?;
            writeln!(f, "  Memory: {} MB", profile.gpu_memory_mb)?;
            writeln!(
                f,
                "{}: {}",
                profile.gpu_vendor.accel_stack_name(),
                format_presence(profile.has_vendor_accel_stack)
            )?;
        } else {
            writeln!(f, "GPU: ✗ No supported GPU")?;
        }
        write!(f, "System Memory: {} MB", profile.system_memory_mb)
    }
}

struct UtilizationText<'a>(&'a UtilizationSample);

impl fmt::Display for UtilizationText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample = self.0;
        writeln!(f, "CPU Usage: {:.1}%", sample.cpu_percent)?;
        write!(
            f,
            "Memory Usage: {:.1}% ({} MB / {} MB)",
            sample.memory_percent, sample.memory_used_mb, sample.memory_total_mb
        )?;
        match sample.gpu_percent() {
            Some(percent) => write!(f, "\nGPU Usage: {percent:.1}%")?,
            None => write!(f, "\nGPU Usage: unavailable")?,
        }
        if sample.has_gpu_memory() {
            write!(
                f,
                "\nGPU Memory: {} MB / {} MB",
                sample.gpu_memory_used_mb, sample.gpu_memory_total_mb
            )?;
        }
        Ok(())
    }
}

/// Full human-readable status report.
pub struct StatusText<'a>(pub &'a StatusReport);

impl fmt::Display for StatusText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "=== Lite LLM Status ===")?;
        writeln!(
            f,
            "Timestamp: {}",
            report
                .generated_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
        )?;

        writeln!(f, "\n=== System Information ===")?;
        writeln!(f, "{}", HardwareText(&report.hardware))?;

        writeln!(f, "\n=== Ollama Service ===")?;
        let server = &report.server;
        writeln!(f, "Ollama API: {}", format_status(server.healthy))?;
        writeln!(f, "  Endpoint: {}", server.endpoint)?;
        if let Some(error) = &server.error {
            writeln!(f, "  Error: {error}")?;
        }
        if let Some(error) = &server.models_error {
            writeln!(f, "  Models: Failed to list ({error})")?;
        } else if server.healthy {
            writeln!(f, "  Models: {} installed", server.models.len())?;
            for model in &server.models {
                writeln!(f, "    - {} ({})", model.name, format_size_gb(model))?;
            }
        }

        writeln!(f, "\n=== Web Interfaces ===")?;
        for endpoint in &report.web_endpoints {
            writeln!(f, "{}: {}", endpoint.name, format_status(endpoint.reachable))?;
            if endpoint.reachable {
                writeln!(f, "  URL: {}", endpoint.url)?;
            }
        }

        writeln!(f, "\n=== Performance Metrics ===")?;
        write!(f, "{}", UtilizationText(&report.utilization))
    }
}
