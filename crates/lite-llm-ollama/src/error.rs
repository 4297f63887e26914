//! Error types for Ollama operations.
//!
//! These are mapped to the core `ModelServerError` at the port boundary.

use thiserror::Error;

/// Result type alias for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;

/// Errors related to Ollama API operations.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// Connection failure, timeout or cancellation.
    #[error("Cannot reach Ollama at {url}: {reason}")]
    Unreachable {
        /// The URL that was requested
        url: String,
        reason: String,
    },

    /// The server answered with something other than HTTP 200.
    #[error("Ollama request failed with status {status}: {url}")]
    NonSuccessStatus {
        /// The URL that was requested
        url: String,
        status: u16,
    },

    /// A response body or stream line was not the expected JSON.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The server reported an error inside a pull stream.
    #[error("Ollama reported an error: {message}")]
    Remote { message: String },

    /// The client could not be built from its configuration.
    #[error("Invalid Ollama client configuration: {message}")]
    Configuration { message: String },
}

impl OllamaError {
    pub(crate) fn unreachable(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreachable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn cancelled(url: impl Into<String>) -> Self {
        Self::unreachable(url, "request cancelled")
    }

    pub(crate) fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

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
