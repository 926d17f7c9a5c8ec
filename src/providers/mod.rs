mod anthropic;
mod factory;
mod google;
mod ollama;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

/// Token usage information from the LLM response
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

/// Metadata about a generation call
#[derive(Debug, Clone, Default)]
pub struct GenerationMetadata {
    /// Model version reported by the provider
    pub model_version: Option<String>,
    pub tokens_used: TokenUsage,
    /// Wall-clock time of the upstream call in milliseconds
    pub latency_ms: u64,
}

/// Raw model text plus call metadata
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub content: String,
    pub metadata: GenerationMetadata,
}

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send a prompt to the model and return its text response
    async fn generate(&self, prompt: &str)
        -> Result<GenerationResult, Box<dyn Error + Send + Sync>>;
}

/// Build the shared HTTP client, applying the request timeout when configured
pub(crate) fn http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let builder = Client::builder();
    match timeout {
        Some(duration) => builder.timeout(duration).build(),
        None => builder.build(),
    }
}

/// Describe a non-success upstream response, using the API's error message if present
pub(crate) fn upstream_error(provider: &str, status: StatusCode, body: &Value) -> String {
    let message = body["error"]["message"]
        .as_str()
        .or_else(|| body["error"].as_str())
        .unwrap_or("Unknown error");
    format!("{} API error ({}): {}", provider, status.as_u16(), message)
}

/// Take the text at `pointer` out of a response body
pub(crate) fn extract_text(
    provider: &str,
    body: &Value,
    pointer: &str,
) -> Result<String, Box<dyn Error + Send + Sync>> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            format!(
                "Failed to extract content from {} response. Response: {}",
                provider,
                serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
            )
            .into()
        })
}

fn token_count(body: &Value, pointer: &str) -> Option<u32> {
    body.pointer(pointer)
        .and_then(Value::as_u64)
        .map(|v| v as u32)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_error_uses_nested_message() {
        let body = json!({"error": {"code": 429, "message": "Quota exceeded"}});
        let message = upstream_error("Google Gemini", StatusCode::TOO_MANY_REQUESTS, &body);
        assert_eq!(message, "Google Gemini API error (429): Quota exceeded");
    }

    #[test]
    fn test_upstream_error_uses_string_error() {
        let body = json!({"error": "Invalid request"});
        let message = upstream_error("OpenAI", StatusCode::BAD_REQUEST, &body);
        assert!(message.ends_with("Invalid request"));
    }

    #[test]
    fn test_extract_text_missing() {
        let body = json!({"candidates": []});
        let result = extract_text("Google Gemini", &body, "/candidates/0/content/parts/0/text");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to extract content"));
    }

    #[test]
    fn test_token_count() {
        let body = json!({"usage": {"prompt_tokens": 12}});
        assert_eq!(token_count(&body, "/usage/prompt_tokens"), Some(12));
        assert_eq!(token_count(&body, "/usage/completion_tokens"), None);
    }
}
