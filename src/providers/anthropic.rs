use super::{
    extract_text, http_client, token_count, GenerationMetadata, GenerationResult, LlmProvider,
    TokenUsage,
};
use crate::config::ProviderConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::{Duration, Instant};

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or("ANTHROPIC_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.anthropic.com".to_string());

        Ok(AnthropicProvider {
            client: http_client(timeout)?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, Box<dyn Error + Send + Sync>> {
        let start = Instant::now();

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        let response_body: Value = response.json().await?;
        debug!("Anthropic response: {:?}", response_body);

        // Anthropic errors carry a type alongside the message
        if !status.is_success() || response_body.get("error").is_some() {
            let error_type = response_body["error"]["type"].as_str().unwrap_or("unknown");
            let error_message = response_body["error"]["message"]
                .as_str()
                .unwrap_or("Unknown error");
            return Err(format!("Anthropic API error ({}): {}", error_type, error_message).into());
        }

        let content = extract_text("Anthropic", &response_body, "/content/0/text")?;

        Ok(GenerationResult {
            content,
            metadata: GenerationMetadata {
                model_version: response_body["model"].as_str().map(|s| s.to_string()),
                tokens_used: TokenUsage {
                    input_tokens: token_count(&response_body, "/usage/input_tokens"),
                    output_tokens: token_count(&response_body, "/usage/output_tokens"),
                },
                latency_ms,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::testing::provider_config;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "test-key")
            .match_header("anthropic-version", "2023-06-01")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "model": "claude-sonnet-4-5",
                    "content": [{"type": "text", "text": "* Risotto\n* Paella"}],
                    "usage": {"input_tokens": 25, "output_tokens": 6}
                }"#,
            )
            .create_async()
            .await;

        let config = provider_config(Some("test-key"), Some(server.url()));
        let provider = AnthropicProvider::new(&config, None).unwrap();

        let result = provider.generate("rice, saffron").await.unwrap();
        assert_eq!(result.content, "* Risotto\n* Paella");
        assert_eq!(result.metadata.tokens_used.input_tokens, Some(25));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/messages")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"type": "error", "error": {"type": "authentication_error", "message": "invalid x-api-key"}}"#,
            )
            .create_async()
            .await;

        let config = provider_config(Some("bad-key"), Some(server.url()));
        let provider = AnthropicProvider::new(&config, None).unwrap();

        let error = provider.generate("anything").await.unwrap_err().to_string();
        assert!(error.contains("authentication_error"));
    }

    #[test]
    fn test_provider_name() {
        let config = provider_config(Some("test-key"), None);
        let provider = AnthropicProvider::new(&config, None).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
    }
}
