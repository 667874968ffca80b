//! Configuration system (layered: code > env > config file).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use tracing::debug;

use crate::error::{LectioError, Result};
use crate::provider::Backend;
use crate::resources::Language;
use crate::types::{EssayVariant, GenerationSettings};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "lectio.toml";

/// Layered configuration for Lectio.
///
/// Resolution order:
/// 1. Values set in code (`with_*`, `set_*`)
/// 2. Environment variables (a `.env` file is loaded if present)
/// 3. `lectio.toml` in the working directory, else `~/.lectio/config.toml`
#[derive(Debug, Clone, Default)]
pub struct LectioConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
    backend: Backend,
    model: Option<String>,
    variant: EssayVariant,
    language: Language,
    resource_dir: Option<PathBuf>,
    sampling: GenerationSettings,
}

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    backend: Option<Backend>,
    model: Option<String>,
    variant: Option<EssayVariant>,
    language: Option<Language>,
    resource_dir: Option<PathBuf>,
    sampling: Option<GenerationSettings>,
    api_keys: HashMap<String, String>,
    base_urls: HashMap<String, String>,
}

const API_KEY_ENV: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "openai"),
    ("KLUSTERAI_API_KEY", "openai"),
    ("GOOGLE_API_KEY", "google"),
    ("GEMINI_API_KEY", "google"),
];

const BASE_URL_ENV: [(&str, &str); 2] = [("OPENAI_BASE_URL", "openai"), ("GOOGLE_BASE_URL", "google")];

impl LectioConfig {
    /// Empty config: default backend and variant, no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all layers: config file, then environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let base = match default_config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::new(),
        };
        base.apply_env()
    }

    /// Environment layer only.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::new().apply_env()
    }

    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading config file");
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = Self::new();
        if let Some(backend) = file.backend {
            config.backend = backend;
        }
        if let Some(variant) = file.variant {
            config.variant = variant;
        }
        if let Some(language) = file.language {
            config.language = language;
        }
        config.model = file.model;
        config.resource_dir = file.resource_dir;
        config.sampling = file.sampling.unwrap_or_default();
        for (provider, key) in file.api_keys {
            config.set_api_key(&provider, key);
        }
        for (provider, url) in file.base_urls {
            config.set_base_url(&provider, url);
        }
        Ok(config)
    }

    /// Overlay environment variables on top of `self`.
    pub fn apply_env(mut self) -> Result<Self> {
        for (env_var, provider) in &API_KEY_ENV {
            if let Ok(key) = std::env::var(env_var) {
                self.set_api_key(provider, key);
            }
        }
        for (env_var, provider) in &BASE_URL_ENV {
            if let Ok(url) = std::env::var(env_var) {
                self.set_base_url(provider, url);
            }
        }

        if let Some(backend) = env_parse::<Backend>("LECTIO_BACKEND")? {
            self.backend = backend;
        }
        if let Some(variant) = env_parse::<EssayVariant>("LECTIO_VARIANT")? {
            self.variant = variant;
        }
        if let Some(language) = env_parse::<Language>("LECTIO_LANGUAGE")? {
            self.language = language;
        }
        if let Ok(model) = std::env::var("LECTIO_MODEL") {
            self.model = Some(model);
        }
        if let Ok(dir) = std::env::var("LECTIO_RESOURCE_DIR") {
            self.resource_dir = Some(PathBuf::from(dir));
        }

        let env_sampling = GenerationSettings {
            max_tokens: env_parse("LECTIO_MAX_TOKENS")?,
            temperature: env_parse("LECTIO_TEMPERATURE")?,
            top_p: env_parse("LECTIO_TOP_P")?,
            top_k: env_parse("LECTIO_TOP_K")?,
        };
        self.sampling = env_sampling.or(&self.sampling);

        Ok(self)
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_variant(mut self, variant: EssayVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_resource_dir(mut self, dir: PathBuf) -> Self {
        self.resource_dir = Some(dir);
        self
    }

    pub fn with_sampling(mut self, sampling: GenerationSettings) -> Self {
        self.sampling = sampling.or(&self.sampling);
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn model(&self) -> Option<String> {
        self.model.clone()
    }

    pub fn variant(&self) -> EssayVariant {
        self.variant
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    /// Sampling overrides; unset fields fall back to the backend's defaults.
    pub fn sampling(&self) -> &GenerationSettings {
        &self.sampling
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        self.api_keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(provider.to_string(), key);
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys.read().ok()?.get(provider).cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        self.base_urls
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(provider.to_string(), url);
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls.read().ok()?.get(provider).cloned()
    }

    pub fn has_credentials(&self) -> bool {
        self.get_api_key(self.backend.config_key()).is_some()
    }
}

fn env_parse<T: FromStr>(var: &str) -> Result<Option<T>> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| LectioError::Configuration(format!("{var} has an invalid value: '{raw}'"))),
        _ => Ok(None),
    }
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".lectio").join("config.toml"))
        .filter(|path| path.is_file())
}
