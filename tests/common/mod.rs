//! Shared test helpers and mock generator.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use lectio::error::LectioError;
use lectio::provider::TextGenerator;
use lectio::types::GenerationSettings;

enum Outcome {
    Text(String),
    Status(u16, String),
}

/// A generator that replays queued outcomes in order and records prompts.
pub struct MockGenerator {
    outcomes: Mutex<Vec<Outcome>>,
    prompts: Mutex<Vec<String>>,
    settings: Mutex<Vec<GenerationSettings>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            settings: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful exchange.
    pub fn queue_text(&self, text: &str) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(Outcome::Text(text.to_string()));
        self
    }

    /// Queue a failed exchange with an HTTP status.
    pub fn queue_status(&self, status: u16, body: &str) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(Outcome::Status(status, body.to_string()));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_settings(&self) -> Option<GenerationSettings> {
        self.settings.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }

    fn default_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .max_tokens(1000)
            .temperature(0.5)
            .build()
    }

    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, LectioError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.settings.lock().unwrap().push(settings.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok("Mock essay".to_string());
        }
        match outcomes.remove(0) {
            Outcome::Text(text) => Ok(text),
            Outcome::Status(status, body) => Err(LectioError::api(status, body)),
        }
    }
}

/// `n` space-separated copies of `word`.
pub fn words(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}
