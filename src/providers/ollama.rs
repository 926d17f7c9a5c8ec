use super::{
    extract_text, http_client, token_count, upstream_error, GenerationMetadata,
    GenerationResult, LlmProvider, TokenUsage,
};
use crate::config::ProviderConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::{Duration, Instant};

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        Ok(OllamaProvider {
            client: http_client(timeout)?,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, Box<dyn Error + Send + Sync>> {
        let start = Instant::now();

        // Ollama uses OpenAI-compatible API
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        let response_body: Value = response.json().await?;
        debug!("Ollama response: {:?}", response_body);

        if !status.is_success() || response_body.get("error").is_some() {
            return Err(upstream_error("Ollama", status, &response_body).into());
        }

        let content = extract_text("Ollama", &response_body, "/choices/0/message/content")?;

        Ok(GenerationResult {
            content,
            metadata: GenerationMetadata {
                model_version: Some(self.model.clone()),
                tokens_used: TokenUsage {
                    input_tokens: token_count(&response_body, "/usage/prompt_tokens"),
                    output_tokens: token_count(&response_body, "/usage/completion_tokens"),
                },
                latency_ms,
            },
        })
    }
}
