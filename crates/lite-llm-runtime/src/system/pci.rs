//! `lspci -v` parsing.
//!
//! All matching rules live in [`VENDOR_PATTERNS`] and the constants below,
//! so new board names only need a table edit and a fixture.

use std::sync::LazyLock;

use lite_llm_core::GpuVendor;
use regex::Regex;

/// Marker on the first line of a display controller entry.
pub const CONTROLLER_MARKER: &str = "VGA compatible controller";

/// Vendor name patterns in priority order. A host with GPUs from both
/// vendors reports the first one listed here.
pub const VENDOR_PATTERNS: &[(GpuVendor, &str)] = &[
    (GpuVendor::Nvidia, r"(?i)NVIDIA.*(GeForce|RTX|GTX|Tesla|Quadro)"),
    (GpuVendor::Amd, r"(?i)(AMD|ATI).*(Radeon|RX|Ellesmere|Polaris)"),
];

const MEMORY_PATTERN: &str = r"(?i)memory.*?(\d+)([MG])B";

/// Detail lines scanned for a memory size after the controller line.
const DETAIL_WINDOW: usize = 19;

static VENDOR_REGEXES: LazyLock<Vec<(GpuVendor, Regex)>> = LazyLock::new(|| {
    VENDOR_PATTERNS
        .iter()
        .map(|(vendor, pattern)| {
            (
                *vendor,
                Regex::new(pattern).expect("vendor patterns are valid regexes"),
            )
        })
        .collect()
});

static MEMORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MEMORY_PATTERN).expect("memory pattern is a valid regex"));

/// A display controller recognised in `lspci -v` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PciGpu {
    pub vendor: GpuVendor,
    /// Text between the first and second `": "` of the controller line.
    pub model: String,
    /// Size advertised in the detail lines, when one was found.
    pub memory_mb: Option<u64>,
}

/// Find the first supported GPU in `lspci -v` output.
///
/// Vendors are tried in [`VENDOR_PATTERNS`] order; within a vendor the
/// first matching controller line wins.
pub fn find_gpu(lspci_output: &str) -> Option<PciGpu> {
    let lines: Vec<&str> = lspci_output.lines().collect();

    VENDOR_REGEXES.iter().find_map(|(vendor, pattern)| {
        let index = lines
            .iter()
            .position(|line| line.contains(CONTROLLER_MARKER) && pattern.is_match(line))?;

        Some(PciGpu {
            vendor: *vendor,
            model: controller_model(lines[index]),
            memory_mb: detail_memory_mb(&lines[index + 1..]),
        })
    })
}

fn controller_model(line: &str) -> String {
    line.split(": ")
        .nth(1)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Scan the entry's detail lines, up to the blank line ending the entry.
fn detail_memory_mb(details: &[&str]) -> Option<u64> {
    details
        .iter()
        .take(DETAIL_WINDOW)
        .take_while(|line| !line.trim().is_empty())
        .find_map(|line| parse_memory_mb(line))
        .filter(|&mb| mb > 0)
}

/// `"Dedicated memory: 4096MB"` -> 4096, `"... memory ... 8GB"` -> 8192.
pub fn parse_memory_mb(line: &str) -> Option<u64> {
    let captures = MEMORY_REGEX.captures(line)?;
    let size: u64 = captures[1].parse().ok()?;
    if captures[2].eq_ignore_ascii_case("G") {
        size.checked_mul(1024)
    } else {
        Some(size)
    }
}
