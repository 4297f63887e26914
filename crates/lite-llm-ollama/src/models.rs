//! Wire types for the Ollama JSON API.
//!
//! Response types that other crates need (`ModelRecord`,
//! `PullProgressEvent`, `GenerateResult`) live in lite-llm-core; this module
//! only holds request bodies and response envelopes.

use lite_llm_core::{GenerateOptions, ModelRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PullRequest<'a> {
    pub name: &'a str,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// `GET /api/tags`
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

/// `GET /api/version`
#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_request_omits_empty_options() {
        let request = GenerateRequest {
            model: "mistral:7b",
            prompt: "hi",
            stream: false,
            options: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model": "mistral:7b", "prompt": "hi", "stream": false})
        );
    }

    #[test]
    fn test_generate_request_with_options() {
        let mut options = GenerateOptions::new();
        options.insert("temperature".to_string(), json!(0.2));
        let request = GenerateRequest {
            model: "mistral:7b",
            prompt: "hi",
            stream: false,
            options: Some(options),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap()["options"],
            json!({"temperature": 0.2})
        );
    }

    #[test]
    fn test_tags_without_models_field() {
        let tags: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(tags.models.is_empty());
    }
}
