//! Google Gemini `generateContent` backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::LectioError;
use crate::types::GenerationSettings;

use super::http::{json_headers, send_for_body, shared_client};
use super::TextGenerator;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

pub struct GoogleProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
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
        let mut gen_config = serde_json::Map::new();
        if let Some(temp) = settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(top_p) = settings.top_p {
            gen_config.insert("topP".into(), top_p.into());
        }
        if let Some(top_k) = settings.top_k {
            gen_config.insert("topK".into(), top_k.into());
        }
        if let Some(max) = settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }

        let mut body = serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
        });
        if !gen_config.is_empty() {
            if let Some(obj) = body.as_object_mut() {
                obj.insert(
                    "generationConfig".into(),
                    serde_json::Value::Object(gen_config),
                );
            }
        }
        body
    }
}

#[async_trait]
impl TextGenerator for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    fn default_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .max_tokens(8192)
            .temperature(0.7)
            .top_p(0.95)
            .top_k(40)
            .build()
    }

    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LectioError> {
        let body = self.build_request_body(prompt, settings);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(model = %self.model, prompt_chars = prompt.len(), "generateContent request");

        let raw = send_for_body(
            shared_client()
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .headers(json_headers())
                .json(&body),
        )
        .await?;

        let data: GeminiResponse = serde_json::from_str(&raw)
            .map_err(|e| LectioError::malformed(self.provider_name(), e.to_string()))?;
        let candidate = data.candidates.into_iter().next().ok_or_else(|| {
            LectioError::malformed(self.provider_name(), "no candidates in response")
        })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() {
            return Err(LectioError::malformed(
                self.provider_name(),
                "candidate has no text parts",
            ));
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
