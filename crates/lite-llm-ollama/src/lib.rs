#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod models;
mod port;
mod stream;

// ============================================================================
// Public API
// ============================================================================

pub use client::OllamaClient;
pub use config::OllamaClientConfig;
pub use error::{OllamaError, OllamaResult};
pub use stream::PullStream;

// Re-exported so callers can bind a client without depending on tokio-util.
pub use tokio_util::sync::CancellationToken;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
