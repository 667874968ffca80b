//! Language resources (stop-word lists) and their on-disk cache.
//!
//! Lists ship inside the binary. [`ResourceStore::ensure`] materializes one
//! into the cache directory when it is missing and leaves it alone otherwise,
//! so the files can be inspected or edited by hand between runs.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info};

use crate::error::{LectioError, Result};

const SPANISH_STOPWORDS: &str = include_str!("stopwords/spanish.txt");
const ENGLISH_STOPWORDS: &str = include_str!("stopwords/english.txt");

static PREPARED: OnceLock<PathBuf> = OnceLock::new();

/// Language of the essay and of its stop-word list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    fn embedded_stopwords(self) -> &'static str {
        match self {
            Self::Spanish => SPANISH_STOPWORDS,
            Self::English => ENGLISH_STOPWORDS,
        }
    }
}

/// Directory holding cached resource files.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    base_dir: PathBuf,
}

impl ResourceStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn new_default() -> Self {
        Self::new(Self::default_dir())
    }

    /// `~/.lectio/resources`, or `.lectio/resources` without a home directory.
    pub fn default_dir() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".lectio"))
            .unwrap_or_else(|| PathBuf::from(".lectio"))
            .join("resources")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn stopwords_path(&self, language: Language) -> PathBuf {
        self.base_dir
            .join("stopwords")
            .join(format!("{language}.txt"))
    }

    /// Write the stop-word list for `language` unless it is already present.
    pub fn ensure(&self, language: Language) -> Result<PathBuf> {
        let path = self.stopwords_path(language);
        if path.is_file() {
            debug!(path = %path.display(), "stop-word list already present");
            return Ok(path);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LectioError::Resource(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        fs::write(&path, language.embedded_stopwords()).map_err(|e| {
            LectioError::Resource(format!("cannot write {}: {e}", path.display()))
        })?;
        info!(%language, path = %path.display(), "stop-word list installed");
        Ok(path)
    }

    /// Ensure every supported language.
    pub fn ensure_all(&self) -> Result<Vec<PathBuf>> {
        Language::iter().map(|language| self.ensure(language)).collect()
    }
}

/// One-time resource preparation for the process.
///
/// Later calls for the same store return immediately.
pub fn prepare(store: &ResourceStore) -> Result<()> {
    if PREPARED.get().is_some_and(|dir| dir == store.base_dir()) {
        return Ok(());
    }
    store.ensure_all()?;
    let _ = PREPARED.set(store.base_dir().to_path_buf());
    Ok(())
}

/// Stop-word set for one language.
#[derive(Debug, Clone)]
pub struct StopWords {
    language: Language,
    words: HashSet<String>,
}

impl StopWords {
    /// Load from the store, installing the list first if needed.
    pub fn load(store: &ResourceStore, language: Language) -> Result<Self> {
        let path = store.ensure(language)?;
        let raw = fs::read_to_string(&path).map_err(|e| {
            LectioError::Resource(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(Self::parse(language, &raw))
    }

    /// Built-in list, without touching the filesystem.
    pub fn embedded(language: Language) -> Self {
        Self::parse(language, language.embedded_stopwords())
    }

    pub fn from_words<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    fn parse(language: Language, raw: &str) -> Self {
        Self::from_words(
            language,
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        )
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
