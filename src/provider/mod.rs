//! Text-generation backends.
//!
//! Each backend speaks one service schema and implements [`TextGenerator`].
//! The two schemas are alternatives; [`create_provider`] picks one from config.

pub mod http;

#[cfg(feature = "google")]
pub mod google;
#[cfg(feature = "openai")]
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::LectioConfig;
use crate::error::LectioError;
use crate::types::GenerationSettings;

/// Prompt in, text out.
///
/// One call is exactly one request/response exchange: no retry, no backoff.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name (e.g., "openai", "google").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Sampling controls used when configuration leaves a field unset.
    fn default_settings(&self) -> GenerationSettings {
        GenerationSettings::default()
    }

    /// Generate text for a single prompt.
    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LectioError>;
}

/// Service schema to talk to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Backend {
    /// Chat-completions schema (`choices[0].message.content`).
    #[default]
    OpenAi,
    /// Content-generation schema (`candidates[0].content.parts`).
    Google,
}

impl Backend {
    /// Key used for this backend in [`LectioConfig`] maps.
    pub fn config_key(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Google => "google",
        }
    }
}

/// Create the configured backend.
#[allow(unused_variables)]
pub fn create_provider(config: &LectioConfig) -> Result<Box<dyn TextGenerator>, LectioError> {
    let backend = config.backend();
    match backend {
        #[cfg(feature = "openai")]
        Backend::OpenAi => {
            let api_key = config.get_api_key(backend.config_key()).ok_or_else(|| {
                LectioError::Authentication("Missing KLUSTERAI_API_KEY or OPENAI_API_KEY".into())
            })?;
            Ok(Box::new(openai::OpenAiChatProvider::new(
                config.model(),
                api_key,
                config.get_base_url(backend.config_key()),
            )))
        }
        #[cfg(feature = "google")]
        Backend::Google => {
            let api_key = config.get_api_key(backend.config_key()).ok_or_else(|| {
                LectioError::Authentication("Missing GOOGLE_API_KEY or GEMINI_API_KEY".into())
            })?;
            Ok(Box::new(google::GoogleProvider::new(
                config.model(),
                api_key,
                config.get_base_url(backend.config_key()),
            )))
        }
        #[allow(unreachable_patterns)]
        _ => Err(LectioError::Configuration(format!(
            "Backend '{backend}' not enabled via feature flags"
        ))),
    }
}
