//! System memory usage from `/proc/meminfo`.

use crate::procfs::meminfo_mb;

/// Memory figures in MB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryUsage {
    pub used_mb: u64,
    pub total_mb: u64,
    pub percent: f64,
}

/// Used memory excludes buffers and page cache. Each field is converted
/// to MB before subtracting; missing fields count as zero.
pub fn memory_usage(meminfo: &str) -> MemoryUsage {
    let field = |key: &str| meminfo_mb(meminfo, key).unwrap_or(0);

    let total_mb = field("MemTotal");
    let used_mb = total_mb
        .saturating_sub(field("MemFree"))
        .saturating_sub(field("Buffers"))
        .saturating_sub(field("Cached"));
    let percent = if total_mb > 0 {
        used_mb as f64 / total_mb as f64 * 100.0
    } else {
        0.0
    };

    MemoryUsage {
        used_mb,
        total_mb,
        percent,
    }
}
