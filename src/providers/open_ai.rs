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

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or("OPENAI_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        Ok(OpenAIProvider {
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
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, Box<dyn Error + Send + Sync>> {
        let start = Instant::now();

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
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
        debug!("OpenAI response: {:?}", response_body);

        if !status.is_success() || response_body.get("error").is_some() {
            return Err(upstream_error("OpenAI", status, &response_body).into());
        }

        let content = extract_text("OpenAI", &response_body, "/choices/0/message/content")?;

        Ok(GenerationResult {
            content,
            metadata: GenerationMetadata {
                model_version: response_body["model"].as_str().map(|s| s.to_string()),
                tokens_used: TokenUsage {
                    input_tokens: token_count(&response_body, "/usage/prompt_tokens"),
                    output_tokens: token_count(&response_body, "/usage/completion_tokens"),
                },
                latency_ms,
            },
        })
    }
}
