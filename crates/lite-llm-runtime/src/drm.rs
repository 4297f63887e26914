//! DRM sysfs layout shared by the GPU memory fallback and the GPU sampler.

use std::io;
use std::path::{Path, PathBuf};

use crate::source::HostSource;

/// DRM class directory.
pub const DRM_CLASS_DIR: &str = "/sys/class/drm";

/// Total VRAM in bytes.
pub const VRAM_TOTAL_ATTR: &str = "mem_info_vram_total";
/// Used VRAM in bytes.
pub const VRAM_USED_ATTR: &str = "mem_info_vram_used";
/// Busy percent attributes, newest driver naming first.
pub const BUSY_PERCENT_ATTRS: [&str; 2] = ["gpu_busy_percent", "busy_percent"];

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Card directories (`card0`, `card1`, ...) sorted by name. Connector
/// entries such as `card0-DP-1` are skipped.
pub fn card_names(source: &dyn HostSource) -> io::Result<Vec<String>> {
    let mut cards: Vec<String> = source
        .list_dir(Path::new(DRM_CLASS_DIR))?
        .into_iter()
        .filter(|name| name.starts_with("card") && !name.contains('-'))
        .collect();
    cards.sort();
    Ok(cards)
}

/// Path of a device attribute for a card.
pub fn device_attribute(card: &str, attribute: &str) -> PathBuf {
    Path::new(DRM_CLASS_DIR)
        .join(card)
        .join("device")
        .join(attribute)
}

pub const fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSource;

    #[test]
    fn test_card_names_skip_connectors_and_sort() {
        let source = FakeSource::new().with_dir(
            DRM_CLASS_DIR,
            &["renderD128", "card1", "card0-HDMI-A-1", "card0", "version"],
        );
        assert_eq!(card_names(&source).unwrap(), vec!["card0", "card1"]);
    }

    #[test]
    fn test_device_attribute_path() {
        assert_eq!(
            device_attribute("card0", VRAM_TOTAL_ATTR),
            PathBuf::from("/sys/class/drm/card0/device/mem_info_vram_total")
        );
        assert_eq!(bytes_to_mb(8_573_157_376), 8176);
    }
}
