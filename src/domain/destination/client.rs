use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AppError;

/// Text-generation capability behind the destination endpoint.
///
/// Abstracting the provider call keeps the HTTP layer testable without
/// live Gemini access.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Arc-wrapped generator, cloneable across handlers.
pub type SharedTextGenerator = Arc<dyn TextGenerator>;

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GenerationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationFailed(format!(
                "Gemini API returned {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GenerationFailed(format!("invalid Gemini response: {e}")))?;

        let candidate = payload.candidates.into_iter().next().ok_or_else(|| {
            AppError::GenerationFailed("Gemini response contained no candidates".to_string())
        })?;

        // A candidate may arrive in several parts; their concatenation is
        // the reply text. No candidate content at all reads as empty.
        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            server_port: 5000,
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_api_base: "https://generativelanguage.googleapis.com/".to_string(),
        }
    }

    #[test]
    fn should_create_gemini_client() {
        let client = GeminiClient::new(&test_config());

        assert_eq!(client.model, "gemini-2.0-flash");
        assert_eq!(client.api_base, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn should_serialize_request_in_wire_shape() {
        // Arrange
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };

        // Act
        let value = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(
            value,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn should_deserialize_generate_content_response() {
        // Arrange
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "## Overview\n"}, {"text": "Paris."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ],
            "modelVersion": "gemini-2.0-flash"
        }"#;

        // Act
        let payload: GenerateContentResponse = serde_json::from_str(json).unwrap();

        // Assert
        let parts = &payload.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text, "## Overview\n");
        assert_eq!(parts[1].text, "Paris.");
    }

    #[test]
    fn should_tolerate_empty_response_payload() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert!(payload.candidates.is_empty());
    }
}
