#![allow(dead_code)]

use async_trait::async_trait;
use pantry_pal::providers::{GenerationMetadata, GenerationResult, LlmProvider};
use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Provider that replays canned replies in order and records every prompt
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(ScriptedProvider {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text)])
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::new(vec![Err(message)])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerationResult, Box<dyn Error + Send + Sync>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".to_string()));
        match reply {
            Ok(content) => Ok(GenerationResult {
                content,
                metadata: GenerationMetadata::default(),
            }),
            Err(message) => Err(message.into()),
        }
    }
}
