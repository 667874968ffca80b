//! Chat-completions backend (OpenAI wire format, served by Kluster.ai by default).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::LectioError;
use crate::types::GenerationSettings;

use super::http::{bearer_headers, send_for_body, shared_client};
use super::TextGenerator;

pub const DEFAULT_BASE_URL: &str = "https://api.kluster.ai/v1";
pub const DEFAULT_MODEL: &str = "google/gemma-3-27b-it";

pub struct OpenAiChatProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl OpenAiChatProvider {
    pub fn new(model: Option<String>, api_key: String, base_url: Option<String>) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    fn build_request_body(&self, prompt: &str, settings: &GenerationSettings) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(max) = settings.max_tokens {
                obj.insert("max_completion_tokens".into(), max.into());
            }
            if let Some(temp) = settings.temperature {
                obj.insert("temperature".into(), temp.into());
            }
            if let Some(top_p) = settings.top_p {
                obj.insert("top_p".into(), top_p.into());
            }
        }

        body
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    fn default_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .max_tokens(7640)
            .temperature(0.6)
            .top_p(1.0)
            .build()
    }

    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LectioError> {
        let body = self.build_request_body(prompt, settings);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, prompt_chars = prompt.len(), "chat completion request");

        let raw = send_for_body(
            shared_client()
                .post(&url)
                .headers(bearer_headers(&self.api_key))
                .json(&body),
        )
        .await?;

        let data: ChatResponse = serde_json::from_str(&raw)
            .map_err(|e| LectioError::malformed(self.provider_name(), e.to_string()))?;
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LectioError::malformed(self.provider_name(), "no choices in response"))
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
