//! Tests for the environment layer of the configuration system.

use std::sync::{Mutex, OnceLock};

use lectio::config::LectioConfig;
use lectio::error::LectioError;
use lectio::provider::Backend;
use lectio::resources::Language;
use lectio::types::EssayVariant;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 15] = [
    "OPENAI_API_KEY",
    "KLUSTERAI_API_KEY",
    "GOOGLE_API_KEY",
    "GEMINI_API_KEY",
    "OPENAI_BASE_URL",
    "GOOGLE_BASE_URL",
    "LECTIO_BACKEND",
    "LECTIO_VARIANT",
    "LECTIO_LANGUAGE",
    "LECTIO_MODEL",
    "LECTIO_RESOURCE_DIR",
    "LECTIO_MAX_TOKENS",
    "LECTIO_TEMPERATURE",
    "LECTIO_TOP_P",
    "LECTIO_TOP_K",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clean_env() -> (std::sync::MutexGuard<'static, ()>, EnvGuard) {
    let lock = env_lock_guard();
    let guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    (lock, guard)
}

#[test]
fn env_layer_reads_backend_and_credentials() {
    let (_lock, _guard) = clean_env();
    std::env::set_var("LECTIO_BACKEND", "google");
    std::env::set_var("GEMINI_API_KEY", "gemini-key");
    std::env::set_var("GOOGLE_BASE_URL", "http://localhost:9999");
    std::env::set_var("LECTIO_VARIANT", "sectioned");
    std::env::set_var("LECTIO_LANGUAGE", "English");
    std::env::set_var("LECTIO_MODEL", "gemini-2.0-flash");

    let config = LectioConfig::new().apply_env().unwrap();

    assert_eq!(config.backend(), Backend::Google);
    assert_eq!(config.get_api_key("google").as_deref(), Some("gemini-key"));
    assert_eq!(
        config.get_base_url("google").as_deref(),
        Some("http://localhost:9999")
    );
    assert_eq!(config.variant(), EssayVariant::Sectioned);
    assert_eq!(config.language(), Language::English);
    assert_eq!(config.model().as_deref(), Some("gemini-2.0-flash"));
    assert!(config.has_credentials());
}

#[test]
fn kluster_key_feeds_the_chat_backend() {
    let (_lock, _guard) = clean_env();
    std::env::set_var("KLUSTERAI_API_KEY", "kluster");

    let config = LectioConfig::new().apply_env().unwrap();

    assert_eq!(config.backend(), Backend::OpenAi);
    assert_eq!(config.get_api_key("openai").as_deref(), Some("kluster"));
}

#[test]
fn env_overrides_file_values() {
    let (_lock, _guard) = clean_env();
    std::env::set_var("LECTIO_TEMPERATURE", "0.25");
    std::env::set_var("LECTIO_TOP_K", "12");

    let config = LectioConfig::from_toml_str(
        "backend = \"google\"\n[sampling]\ntemperature = 0.9\nmax_tokens = 100\n",
    )
    .unwrap()
    .apply_env()
    .unwrap();

    assert_eq!(config.backend(), Backend::Google);
    assert_eq!(config.sampling().temperature, Some(0.25));
    assert_eq!(config.sampling().top_k, Some(12));
    assert_eq!(config.sampling().max_tokens, Some(100));
}

#[test]
fn invalid_env_value_is_a_configuration_error() {
    let (_lock, _guard) = clean_env();
    std::env::set_var("LECTIO_VARIANT", "enormous");

    let err = LectioConfig::new().apply_env().unwrap_err();

    assert!(matches!(err, LectioError::Configuration(ref msg) if msg.contains("LECTIO_VARIANT")));
}

#[test]
fn empty_env_values_are_ignored() {
    let (_lock, _guard) = clean_env();
    std::env::set_var("LECTIO_MAX_TOKENS", "  ");

    let config = LectioConfig::new().apply_env().unwrap();

    assert_eq!(config.sampling().max_tokens, None);
}
