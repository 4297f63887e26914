//! Typed sub-check failures.
//!
//! These never leave the crate through the ports: the probe and the
//! sampler log them and substitute a neutral value.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of one hardware sub-probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The command ran but exited with a failure status.
    #[error("`{command}` exited unsuccessfully")]
    CommandFailed { command: String },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output was read but did not contain the expected value.
    #[error("Unexpected {what}: {value:?}")]
    Parse { what: &'static str, value: String },
}

/// Result type for hardware sub-probes.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Failure of one utilization sub-sample.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `/proc/stat` did not start with the aggregate CPU line.
    #[error("Malformed CPU stat line: {0:?}")]
    MalformedStat(String),

    #[error("Invalid counter {value:?} in {what}")]
    Parse { what: &'static str, value: String },

    /// No DRM card with VRAM accounting was found.
    #[error("No GPU memory information available")]
    NoGpu,
}

/// Result type for utilization sub-samples.
pub type MetricsResult<T> = Result<T, MetricsError>;
