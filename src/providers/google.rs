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

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or("GOOGLE_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(GoogleProvider {
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
impl LlmProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, Box<dyn Error + Send + Sync>> {
        let start = Instant::now();

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        let response_body: Value = response.json().await?;
        debug!("Google Gemini response: {:?}", response_body);

        // Gemini reports errors as {"error": {"code", "message"}}
        if !status.is_success() || response_body.get("error").is_some() {
            return Err(upstream_error("Google Gemini", status, &response_body).into());
        }

        let content = extract_text(
            "Google Gemini",
            &response_body,
            "/candidates/0/content/parts/0/text",
        )?;

        let model_version = response_body["modelVersion"]
            .as_str()
            .map(|s| s.to_string())
            .or_else(|| Some(self.model.clone()));

        Ok(GenerationResult {
            content,
            metadata: GenerationMetadata {
                model_version,
                tokens_used: TokenUsage {
                    input_tokens: token_count(&response_body, "/usageMetadata/promptTokenCount"),
                    output_tokens: token_count(
                        &response_body,
                        "/usageMetadata/candidatesTokenCount",
                    ),
                },
                latency_ms,
            },
        })
    }
}
