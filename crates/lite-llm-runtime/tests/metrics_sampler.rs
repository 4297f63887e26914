//! Metrics sampler against a fake `/proc` and `/sys` laid out on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lite_llm_core::{GPU_UNAVAILABLE, MetricsSamplerPort};
use lite_llm_runtime::{DefaultMetricsSampler, LocalSource};
use tempfile::TempDir;

fn write(root: &Path, path: &str, contents: &str) {
    let full = root.join(path.trim_start_matches('/'));
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, contents).unwrap();
}

fn host_with_proc() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "/proc/stat",
        "cpu  10132153 290696 3084719 46828483 16683 0 25195 0 0 0\ncpu0 1 2 3 4 5 6 7 8 9 10\nintr 12345\n",
    );
    write(
        dir.path(),
        "/proc/meminfo",
        "MemTotal:       32658360 kB\nMemFree:         4096000 kB\nMemAvailable:   20000000 kB\nBuffers:          512000 kB\nCached:          8192000 kB\n",
    );
    dir
}

#[test]
fn samples_cpu_and_memory_from_proc() {
    let dir = host_with_proc();
    let sampler = DefaultMetricsSampler::with_source(Arc::new(LocalSource::with_root(dir.path())));

    let sample = sampler.sample();

    assert!(sample.cpu_percent > 0.0 && sample.cpu_percent < 100.0);
    assert_eq!(sample.memory_total_mb, 32_658_360 / 1024);
    assert_eq!(
        sample.memory_used_mb,
        31892 - 4_096_000 / 1024 - 512_000 / 1024 - 8_192_000 / 1024
    );
    assert_eq!(sample.gpu_percent, GPU_UNAVAILABLE);
}

#[test]
fn vram_total_absent_marks_gpu_unavailable_regardless_of_busy() {
    let dir = host_with_proc();
    write(dir.path(), "/sys/class/drm/card0/device/gpu_busy_percent", "88\n");
    write(dir.path(), "/sys/class/drm/card0/device/mem_info_vram_used", "1048576\n");

    let sample =
        DefaultMetricsSampler::with_source(Arc::new(LocalSource::with_root(dir.path()))).sample();

    assert_eq!(sample.gpu_percent, GPU_UNAVAILABLE);
    assert_eq!(sample.gpu_memory_used_mb, 0);
    assert_eq!(sample.gpu_memory_total_mb, 0);
}

#[test]
fn reads_first_card_in_name_order() {
    let dir = host_with_proc();
    write(dir.path(), "/sys/class/drm/card1/device/mem_info_vram_total", "17179869184\n");
    write(dir.path(), "/sys/class/drm/card0/device/mem_info_vram_total", "8589934592\n");
    write(dir.path(), "/sys/class/drm/card0/device/mem_info_vram_used", "4294967296\n");
    write(dir.path(), "/sys/class/drm/card0/device/busy_percent", "23\n");
    fs::create_dir_all(dir.path().join("sys/class/drm/card0-DP-1")).unwrap();

    let sample =
        DefaultMetricsSampler::with_source(Arc::new(LocalSource::with_root(dir.path()))).sample();

    assert_eq!(sample.gpu_memory_total_mb, 8192);
    assert_eq!(sample.gpu_memory_used_mb, 4096);
    assert_eq!(sample.gpu_percent(), Some(23.0));
}

#[test]
fn missing_proc_degrades_to_zero() {
    let dir = TempDir::new().unwrap();
    let sample =
        DefaultMetricsSampler::with_source(Arc::new(LocalSource::with_root(dir.path()))).sample();

    assert_eq!(sample.cpu_percent, 0.0);
    assert_eq!(sample.memory_total_mb, 0);
    assert_eq!(sample.memory_percent, 0.0);
    assert_eq!(sample.gpu_percent, GPU_UNAVAILABLE);
}
