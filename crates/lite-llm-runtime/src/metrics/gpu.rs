//! GPU utilization from the DRM sysfs attributes (amdgpu).

use lite_llm_core::GPU_UNAVAILABLE;
use tracing::debug;

use crate::drm::{self, BUSY_PERCENT_ATTRS, VRAM_TOTAL_ATTR, VRAM_USED_ATTR};
use crate::error::{MetricsError, MetricsResult};
use crate::source::HostSource;

/// GPU figures; `percent` is [`GPU_UNAVAILABLE`] when unreadable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuUsage {
    pub percent: f64,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
}

fn read_number<T: std::str::FromStr>(
    source: &dyn HostSource,
    card: &str,
    attribute: &'static str,
) -> MetricsResult<T> {
    let path = drm::device_attribute(card, attribute);
    let raw = source
        .read_to_string(&path)
        .map_err(|source| MetricsError::Read { path, source })?;
    raw.trim().parse().map_err(|_| MetricsError::Parse {
        what: attribute,
        value: raw.trim().to_string(),
    })
}

/// Sample the first enumerated card.
///
/// Without a VRAM total the whole metric is unavailable. With one, the
/// memory figures are kept even if no busy percent can be read.
pub fn gpu_usage(source: &dyn HostSource) -> MetricsResult<GpuUsage> {
    let cards = drm::card_names(source).map_err(|source| MetricsError::Read {
        path: drm::DRM_CLASS_DIR.into(),
        source,
    })?;
    let card = cards.first().ok_or(MetricsError::NoGpu)?;

    let total_bytes: u64 = read_number(source, card, VRAM_TOTAL_ATTR)?;
    if total_bytes == 0 {
        return Err(MetricsError::NoGpu);
    }
    let used_bytes: u64 = read_number(source, card, VRAM_USED_ATTR).unwrap_or_else(|e| {
        debug!(error = %e, "VRAM used unavailable");
        0
    });

    let percent = BUSY_PERCENT_ATTRS
        .iter()
        .find_map(|attribute| read_number::<f64>(source, card, *attribute).ok())
        .unwrap_or(GPU_UNAVAILABLE);

    Ok(GpuUsage {
        percent,
        memory_used_mb: drm::bytes_to_mb(used_bytes),
        memory_total_mb: drm::bytes_to_mb(total_bytes),
    })
}
