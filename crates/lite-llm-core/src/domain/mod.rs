//! Core domain types.
//!
//! Every type here is a point-in-time fact: produced by one call,
//! consumed by the caller, never persisted.
//!
//! # Structure
//!
//! - `hardware` - GPU vendor and the hardware profile
//! - `utilization` - CPU / memory / GPU utilization samples
//! - `model` - Inference server model registry and pull progress types

mod hardware;
mod model;
mod utilization;

pub use hardware::{GpuVendor, HardwareProfile};
pub use model::{
    GenerateOptions, GenerateResult, ModelRecord, PULL_SUCCESS_STATUS, PullProgressEvent,
};
pub use utilization::{GPU_UNAVAILABLE, UtilizationSample};
