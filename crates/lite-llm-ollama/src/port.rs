//! `ModelServerPort` implementation for [`OllamaClient`].

use async_trait::async_trait;
use lite_llm_core::{
    GenerateOptions, GenerateResult, ModelRecord, ModelServerError, ModelServerPort,
    ModelServerResult, PullProgressSink,
};

use crate::client::OllamaClient;
use crate::error::OllamaError;

/// Convert internal `OllamaError` to core `ModelServerError`.
fn map_error(err: OllamaError) -> ModelServerError {
    match err {
        OllamaError::Unreachable { url, reason } => ModelServerError::Unreachable {
            message: format!("{url}: {reason}"),
        },
        OllamaError::NonSuccessStatus { status, .. } => {
            ModelServerError::NonSuccessStatus { status }
        }
        OllamaError::Decode { context, source } => ModelServerError::Decode {
            message: format!("{context}: {source}"),
        },
        OllamaError::Remote { message } => ModelServerError::Remote { message },
        OllamaError::Configuration { message } => ModelServerError::Unreachable { message },
    }
}

#[async_trait]
impl ModelServerPort for OllamaClient {
    fn endpoint(&self) -> &str {
        Self::endpoint(self)
    }

    async fn health(&self) -> ModelServerResult<()> {
        Self::health(self).await.map(|_| ()).map_err(map_error)
    }

    async fn list_models(&self) -> ModelServerResult<Vec<ModelRecord>> {
        Self::list_models(self).await.map_err(map_error)
    }

    async fn pull_model(&self, name: &str, sink: PullProgressSink<'_>) -> ModelServerResult<()> {
        Self::pull_model(self, name, |event| sink(event))
            .await
            .map_err(map_error)
    }

    async fn delete_model(&self, name: &str) -> ModelServerResult<()> {
        Self::delete_model(self, name).await.map_err(map_error)
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: GenerateOptions,
    ) -> ModelServerResult<GenerateResult> {
        Self::generate(self, model, prompt, options)
            .await
            .map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_keeps_classification() {
        let mapped = map_error(OllamaError::NonSuccessStatus {
            url: "http://localhost:11434/api/version".to_string(),
            status: 503,
        });
        assert_eq!(mapped, ModelServerError::NonSuccessStatus { status: 503 });

        let mapped = map_error(OllamaError::Unreachable {
            url: "http://localhost:11434/api/tags".to_string(),
            reason: "connection refused".to_string(),
        });
        assert!(mapped.is_unreachable());
        assert!(mapped.to_string().contains("connection refused"));

        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let mapped = map_error(OllamaError::Decode {
            context: "model list".to_string(),
            source,
        });
        assert!(matches!(mapped, ModelServerError::Decode { ref message } if message.starts_with("model list")));
    }
}
