#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod requirements;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    GPU_UNAVAILABLE, GenerateOptions, GenerateResult, GpuVendor, HardwareProfile, ModelRecord,
    PULL_SUCCESS_STATUS, PullProgressEvent, UtilizationSample,
};
pub use ports::{
    EndpointCheckPort, HardwareProbePort, MetricsSamplerPort, ModelServerError, ModelServerPort,
    ModelServerResult, PullProgressSink,
};
pub use requirements::{
    RequirementViolation, RequirementWarning, RequirementsError, RequirementsReport,
    evaluate_requirements,
};
pub use services::{
    EndpointStatus, HostCheck, ServerStatus, StatusReport, StatusService, check_host,
};
pub use settings::{
    DEFAULT_CLIENT_TIMEOUT, DEFAULT_ENDPOINT_TIMEOUT, DEFAULT_OLLAMA_URL,
    DEFAULT_WATCH_INTERVAL_SECS, MIN_GPU_MEMORY_MB, MIN_SYSTEM_MEMORY_MB, RECOMMENDED_MODELS,
    StatusConfig, WatchConfig, WebEndpoint, default_web_endpoints,
};
