//! Public configuration for the Ollama client.

use std::time::Duration;

use lite_llm_core::{DEFAULT_CLIENT_TIMEOUT, DEFAULT_OLLAMA_URL};

/// Configuration for [`OllamaClient`](crate::OllamaClient).
///
/// # Example
///
/// ```
/// use lite_llm_ollama::OllamaClientConfig;
/// use std::time::Duration;
///
/// let config = OllamaClientConfig::new()
///     .with_base_url("http://gpu-box:11434")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct OllamaClientConfig {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl Default for OllamaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            user_agent: concat!("lite-llm/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_CLIENT_TIMEOUT,
        }
    }
}

impl OllamaClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL.
    ///
    /// Defaults to `http://localhost:11434`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout. For pulls this bounds the whole
    /// transfer, not each chunk.
    ///
    /// Defaults to 300 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OllamaClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.user_agent.starts_with("lite-llm/"));
    }

    #[test]
    fn test_builder() {
        let config = OllamaClientConfig::new()
            .with_base_url("http://10.0.0.5:11434")
            .with_user_agent("probe/1.0")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
