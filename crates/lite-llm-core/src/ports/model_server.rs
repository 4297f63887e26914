//! Inference server port.
//!
//! Defines the operations the rest of the system needs from a model server
//! (health, registry listing, pull, delete, generate) without exposing HTTP
//! details. The Ollama adapter in `lite-llm-ollama` implements it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{GenerateOptions, GenerateResult, ModelRecord, PullProgressEvent};

/// Errors surfaced by model server operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelServerError {
    /// Transport failure (connection refused, DNS, timeout) or cancellation.
    #[error("Model server unreachable: {message}")]
    Unreachable { message: String },

    /// The server answered with a non-200 status.
    #[error("Model server returned HTTP {status}")]
    NonSuccessStatus { status: u16 },

    /// A response body or stream line was not the expected JSON.
    #[error("Failed to decode model server response: {message}")]
    Decode { message: String },

    /// The server reported an error inside an otherwise successful response.
    #[error("Model server error: {message}")]
    Remote { message: String },
}

impl ModelServerError {
    /// Whether the server is unusable: not contacted at all, or answering
    /// with a failure status.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(
            self,
            Self::Unreachable { .. } | Self::NonSuccessStatus { .. }
        )
    }
}

/// Result type for model server operations.
pub type ModelServerResult<T> = Result<T, ModelServerError>;

/// Callback receiving each pull progress event in arrival order.
pub type PullProgressSink<'a> = &'a mut (dyn FnMut(&PullProgressEvent) + Send);

/// Port for talking to the inference server.
#[async_trait]
pub trait ModelServerPort: Send + Sync {
    /// Base URL of the server, for display.
    fn endpoint(&self) -> &str;

    /// Succeeds iff the version endpoint answers HTTP 200.
    async fn health(&self) -> ModelServerResult<()>;

    /// Installed models in server order.
    async fn list_models(&self) -> ModelServerResult<Vec<ModelRecord>>;

    /// Pull a model, delivering every progress event to `sink`.
    ///
    /// Returns after the success event has been delivered, or when the
    /// stream ends cleanly without one.
    async fn pull_model(&self, name: &str, sink: PullProgressSink<'_>) -> ModelServerResult<()>;

    /// Remove an installed model.
    async fn delete_model(&self, name: &str) -> ModelServerResult<()>;

    /// Run a single non-streaming generation.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: GenerateOptions,
    ) -> ModelServerResult<GenerateResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_classification() {
        let err = ModelServerError::Unreachable {
            message: "connection refused".to_string(),
        };
        assert!(err.is_unreachable());
        assert!(err.to_string().contains("connection refused"));
        assert!(ModelServerError::NonSuccessStatus { status: 500 }.is_unreachable());
        assert!(
            !ModelServerError::Decode {
                message: "eof".to_string()
            }
            .is_unreachable()
        );
    }
}
