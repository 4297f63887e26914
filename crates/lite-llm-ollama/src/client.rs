//! Ollama HTTP client.

use futures_util::StreamExt;
use lite_llm_core::{GenerateOptions, GenerateResult, ModelRecord, PullProgressEvent};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::config::OllamaClientConfig;
use crate::error::{OllamaError, OllamaResult};
use crate::models::{DeleteRequest, GenerateRequest, PullRequest, TagsResponse, VersionResponse};
use crate::stream::{PullStream, decode_pull_stream};

/// Client for one Ollama server.
///
/// Cheap to clone; clones share the connection pool and the cancellation
/// token.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: Url,
    endpoint: String,
    cancel: CancellationToken,
}

impl OllamaClient {
    /// Create a client from a configuration.
    pub fn new(config: &OllamaClientConfig) -> OllamaResult<Self> {
        let endpoint = config.base_url.trim_end_matches('/').to_string();
        // Trailing slash so `join` appends instead of replacing the last
        // path segment.
        let base_url = Url::parse(&format!("{endpoint}/")).map_err(|e| {
            OllamaError::Configuration {
                message: format!("invalid base URL {:?}: {e}", config.base_url),
            }
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OllamaError::Configuration {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url,
            endpoint,
            cancel: CancellationToken::new(),
        })
    }

    /// Create a client for `http://localhost:11434`.
    pub fn default_client() -> OllamaResult<Self> {
        Self::new(&OllamaClientConfig::default())
    }

    /// Bind the client to a cancellation token. Cancelling it aborts every
    /// in-flight request with [`OllamaError::Unreachable`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Base URL as configured, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> OllamaResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| OllamaError::Configuration {
                message: format!("invalid request path {path:?}: {e}"),
            })
    }

    /// Send a request and require HTTP 200.
    async fn send(&self, request: RequestBuilder, url: &Url) -> OllamaResult<Response> {
        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(OllamaError::cancelled(url.as_str())),
            result = request.send() => result,
        };

        let response = result.map_err(|e| OllamaError::unreachable(url.as_str(), e))?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(url = %url, status = status.as_u16(), "Ollama returned non-success status");
            return Err(OllamaError::NonSuccessStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Read the whole body and decode it as JSON.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
        url: &Url,
        context: &str,
    ) -> OllamaResult<T> {
        let body = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(OllamaError::cancelled(url.as_str())),
            body = response.bytes() => body.map_err(|e| OllamaError::unreachable(url.as_str(), e))?,
        };
        serde_json::from_slice(&body).map_err(|e| OllamaError::decode(context, e))
    }

    /// Check the server answers `GET /api/version` with HTTP 200.
    ///
    /// Any 200 counts as healthy. The reported version is decoded best
    /// effort and is `None` when the body is not the expected JSON.
    pub async fn health(&self) -> OllamaResult<Option<String>> {
        let url = self.url("api/version")?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        let version = match self
            .read_json::<VersionResponse>(response, &url, "version response")
            .await
        {
            Ok(body) => Some(body.version),
            Err(e) => {
                debug!(url = %url, error = %e, "Version not reported");
                None
            }
        };
        debug!(version = ?version, "Ollama is healthy");
        Ok(version)
    }

    /// Installed models, in the order the server lists them.
    pub async fn list_models(&self) -> OllamaResult<Vec<ModelRecord>> {
        let url = self.url("api/tags")?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        let tags: TagsResponse = self.read_json(response, &url, "model list").await?;
        Ok(tags.models)
    }

    /// Start pulling a model and stream its progress.
    pub async fn pull_stream(&self, name: &str) -> OllamaResult<PullStream> {
        let url = self.url("api/pull")?;
        let request = self.http.post(url.clone()).json(&PullRequest { name, stream: true });
        let response = self.send(request, &url).await?;

        Ok(decode_pull_stream(
            response.bytes_stream(),
            url.to_string(),
            self.cancel.clone(),
        ))
    }

    /// Pull a model, handing each progress event to `sink` before reading
    /// the next.
    pub async fn pull_model<F>(&self, name: &str, mut sink: F) -> OllamaResult<()>
    where
        F: FnMut(&PullProgressEvent) + Send,
    {
        let mut events = self.pull_stream(name).await?;
        while let Some(event) = events.next().await {
            sink(&event?);
        }
        Ok(())
    }

    /// Remove an installed model.
    pub async fn delete_model(&self, name: &str) -> OllamaResult<()> {
        let url = self.url("api/delete")?;
        let request = self.http.post(url.clone()).json(&DeleteRequest { name });
        self.send(request, &url).await?;
        Ok(())
    }

    /// Run one non-streaming generation.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: GenerateOptions,
    ) -> OllamaResult<GenerateResult> {
        let url = self.url("api/generate")?;
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: (!options.is_empty()).then_some(options),
        };
        let response = self.send(self.http.post(url.clone()).json(&body), &url).await?;
        self.read_json(response, &url, "generate response").await
    }
}
