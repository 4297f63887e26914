//! `/proc` text formats.

/// Memory accounting pseudo-file.
pub const MEMINFO_PATH: &str = "/proc/meminfo";
/// Kernel/system statistics pseudo-file.
pub const STAT_PATH: &str = "/proc/stat";

/// Value of a `/proc/meminfo` field converted from kB to MB.
///
/// Lines look like `MemTotal:       32658360 kB`.
pub fn meminfo_mb(meminfo: &str, key: &str) -> Option<u64> {
    meminfo.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        let name = fields.next()?.strip_suffix(':')?;
        if name != key {
            return None;
        }
        fields.next()?.parse::<u64>().ok().map(|kb| kb / 1024)
    })
}
